use crate::error::Result;
use crate::persist;

pub fn run() -> Result<()> {
    let path = persist::data_file();
    println!("Data file:     {}", path.display());

    if !path.exists() {
        println!("               (not created yet; seed data will be used)");
        return Ok(());
    }

    let transactions = persist::load(&path)?;
    println!("Transactions:  {}", transactions.len());

    let mut dates: Vec<&str> = transactions.iter().map(|t| t.date.as_str()).collect();
    dates.sort();
    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        println!("Date range:    {first} to {last}");
    }

    let income = transactions
        .iter()
        .filter(|t| t.kind == crate::models::TransactionType::Income)
        .count();
    println!("Income:        {income}");
    println!("Expenses:      {}", transactions.len() - income);
    Ok(())
}
