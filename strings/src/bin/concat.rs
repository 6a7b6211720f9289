use strings::concat::concat;

fn main() {
    println!("Result 1: {}", concat("13", 31));
    println!("Result 2: {}", concat("1331", '1'));
    println!("Result 3: {}", concat(13.3, "1"));
    println!("Result 4: {}", concat(false, ""));
    println!("Result 5: {}", concat("", true));
    println!("Result 6: {}", concat(1331, ""));
    println!("Result 7: {}", concat("", 'A'));
}
