use crate::advice::get_financial_advice;
use crate::error::Result;
use crate::models::Language;
use crate::persist;

/// Print the advice text to stdout, markup and all — piping into another
/// tool keeps the raw `**`/`*`/`- ` markers intact.
pub fn run(lang: Language) -> Result<()> {
    let transactions = persist::load(&persist::data_file())?;
    let text = get_financial_advice(&transactions, lang);
    println!("{text}");
    Ok(())
}
