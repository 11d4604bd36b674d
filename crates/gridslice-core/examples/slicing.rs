use gridslice_core::{Index, Matrix, Selector, SliceRange, Tensor};

fn main() {
    env_logger::init();

    let flat = Tensor::new([5], vec![1, 2, 3, 4, 6]).expect("failed to create tensor");
    println!("Tensor of shape {}:\n{}", flat.shape(), flat);

    // 10x10 grid holding 0..100, so M[r, c] == 10 * r + c
    let m = Matrix::new(10, 10, (0..100).collect::<Vec<i32>>()).expect("failed to create matrix");

    let requests: Vec<Index> = vec![
        Index::pair(1isize, 1isize),
        Index::rows(-1isize),
        Index::rows(1isize..4),
        Index::rows(SliceRange::new(Some(-2), None, Some(-2))),
        Index::pair(Selector::all(), vec![1isize, 4]),
        Index::pair(vec![1isize, 4], vec![1isize, 4]),
    ];

    for index in requests {
        let label = index.to_string();
        match m.get(index) {
            Ok(result) => println!("M[{}]\n{}\n", label, result),
            Err(e) => println!("M[{}] failed: {}\n", label, e),
        }
    }
}
