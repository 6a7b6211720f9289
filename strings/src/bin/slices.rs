use strings::slices::{between_marker_and_last, replace_ends};

fn main() {
    let name = "jackson";
    println!("original name: {name}");
    println!("modified name: {}", replace_ends(name, 'A', 'Z'));

    let address = "www.google.com";
    println!("web address: {address}");

    let site = between_marker_and_last(address, "www.", '.')
        .expect("demo address has the prefix and a trailing domain");
    let final_name = format!("{site}1331");
    println!("modified web address: {final_name}");
}
