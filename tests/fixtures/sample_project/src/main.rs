//! Sample Rust file for testing

fn main() {
    // TODO: read the port from the environment
    println!("Hello from sample project!");
}

fn helper_function() -> i32 {
    42 // TODO: replace magic number   
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper() {
        // todo: lowercase markers are not reported
        assert_eq!(helper_function(), 42);
    }
}
