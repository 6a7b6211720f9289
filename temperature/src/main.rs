use clap::Parser;
use temperature::fahrenheit_to_celsius;

/// Print weekend Fahrenheit readings converted to Celsius.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Saturday reading in degrees Fahrenheit
    #[arg(long, default_value_t = 78)]
    saturday: i32,

    /// Sunday reading in degrees Fahrenheit
    #[arg(long, default_value_t = 81)]
    sunday: i32,
}

fn main() {
    let args = Args::parse();

    println!("Weekend Averages");
    println!("Saturday: {}", fahrenheit_to_celsius(args.saturday));
    println!("Sunday: {}", fahrenheit_to_celsius(args.sunday));
}
