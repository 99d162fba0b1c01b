use dynmat::{DynamicMatrix, DynamicVector, TextRead};
use rand::Rng;

fn main() -> Result<(), dynmat::DmError> {
    env_logger::init();
    let n = 4;
    // random integer matrix and vector
    let mut rng = rand::thread_rng();
    let a = DynamicMatrix::<i64>::from_fn(n, |_, _| rng.gen_range(-5..=5))?;
    let x = DynamicVector::from_fn(n, |i| i as i64)?;

    println!("A =\n{}", a);
    println!("x = {}", x);
    println!("A * x = {}", (&a * &x)?);
    println!("A * A =\n{}", (&a * &a)?);
    println!("A - 2A =\n{}", (&a - &(&a * 2))?);

    // read a matrix from text
    let mut b = DynamicMatrix::<i64>::new(2)?;
    b.read_from("1 2\n3 4\n".as_bytes())?;
    println!("B =\n{}", b);

    // oversized and mismatched requests surface as errors
    if let Err(e) = DynamicVector::<i64>::new(0) {
        println!("new(0): {}", e);
    }
    if let Err(e) = &a * &b {
        println!("A * B: {}", e);
    }
    Ok(())
}
