use strings::identity::same_storage;

fn main() {
    // Two owned strings with the same text, allocated separately
    let first = String::from("Computer Science");
    let second = String::from("Computer Science");

    // Two bindings to the same literal text
    let label_a: &str = "Computer Science";
    let label_b: &str = "Computer Science";

    println!("{}", same_storage(&first, &second)); // distinct heap buffers
    println!("{}", same_storage(label_a, label_b)); // one shared literal
    println!("{}", first == second); // equal contents either way
}
