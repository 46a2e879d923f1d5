use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, Write};
use std::path::Path;

use chrono::{Datelike, Days, NaiveDate};
use rand::{Rng, RngExt};

use sales_reporting_engine::models::month_abbrev;
use sales_reporting_engine::types::TimeBucket;

// price in cents, so the output never carries float noise
const PRODUCTS: [(&str, i64); 11] = [
    ("Latte", 475),
    ("Cappuccino", 450),
    ("Americano", 325),
    ("Espresso", 275),
    ("Flat White", 460),
    ("Cold Brew", 425),
    ("Iced Coffee", 390),
    ("Frappuccino", 550),
    ("Hot Chocolate", 410),
    ("Matcha Latte", 525),
    ("Tea", 290),
];

struct GeneratorConfig {
    num_records: usize,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_records = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(500);
        let output_path = args
            .get(2)
            .cloned()
            .unwrap_or_else(|| "data/coffee_sales.csv".to_string());

        Self { num_records, output_path }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!(
        "Generating {} sales in {}...",
        config.num_records, config.output_path
    );

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(&config.output_path)?;
    let mut writer = io::BufWriter::new(file);

    writeln!(
        writer,
        "Date,Time,hour_of_day,cash_type,coffee_name,money,Time_of_Day,Weekday,Weekdaysort,Month_name,Monthsort"
    )?;

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid start date");
    let mut rng = rand::rng();

    for _ in 0..config.num_records {
        write_sale(&mut writer, &mut rng, start)?;
    }

    println!("Generation complete.");

    Ok(())
}

fn write_sale<W: Write, R: Rng>(writer: &mut W, rng: &mut R, start: NaiveDate) -> io::Result<()> {
    let date = start
        .checked_add_days(Days::new(rng.random_range(0..540)))
        .expect("date in range");
    let hour: u8 = rng.random_range(0..24);
    let minute: u8 = rng.random_range(0..60);
    let second: u8 = rng.random_range(0..60);
    let millis: u16 = rng.random_range(0..1000);

    let (product, base_cents) = PRODUCTS[rng.random_range(0..PRODUCTS.len())];
    let cents = base_cents + [0, 0, 25, 50][rng.random_range(0..4)];
    let cash_type = if rng.random_bool(0.93) { "card" } else { "cash" };

    let bucket = TimeBucket::from_hour(hour).expect("hour in range");
    let month_name = month_abbrev(date.month()).expect("month in range");

    writeln!(
        writer,
        "{},{:02}:{:02}:{:02}.{:03},{},{},{},{}.{:02},{},{},{},{},{}",
        date,
        hour,
        minute,
        second,
        millis,
        hour,
        cash_type,
        product,
        cents / 100,
        cents % 100,
        bucket,
        date.weekday(),
        date.weekday().number_from_monday(),
        month_name,
        date.month()
    )
}
