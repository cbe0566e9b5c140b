use anyhow::Context;

use crate::i18n::tr;
use crate::models::{Language, Transaction};

const MODEL: &str = "gemini-2.5-flash";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Produce natural-language advice for the current transaction list via
/// one blocking request to the text-generation endpoint. Never fails from
/// the caller's point of view: configuration and transport problems come
/// back as localized static messages, with the underlying error logged to
/// stderr. No retry, no streaming.
pub fn get_financial_advice(transactions: &[Transaction], lang: Language) -> String {
    let key = std::env::var(API_KEY_VAR).ok();
    advice_for_key(key.as_deref(), transactions, lang)
}

pub(crate) fn advice_for_key(
    api_key: Option<&str>,
    transactions: &[Transaction],
    lang: Language,
) -> String {
    let key = match api_key {
        Some(k) if !k.is_empty() => k,
        _ => {
            eprintln!("{API_KEY_VAR} environment variable not set.");
            return tr(lang, "apiKeyMissing").to_string();
        }
    };

    let prompt = build_prompt(transactions, lang);
    match request_advice(key, &prompt) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error fetching financial advice: {e:#}");
            tr(lang, "adviceError").to_string()
        }
    }
}

/// Fixed-template prompt embedding the serialized transaction list and a
/// language directive. The response is expected to use the lightweight
/// markup subset the advice panel renders: **bold**, *italics*, and
/// hyphen-prefixed list lines.
fn build_prompt(transactions: &[Transaction], lang: Language) -> String {
    let language_instruction = match lang {
        Language::En => "Please provide the advice in English.",
        Language::Ar => "Please provide the advice in Arabic.",
    };
    let serialized =
        serde_json::to_string_pretty(transactions).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Analyze the following personal financial transactions and provide actionable, \
         concise, and easy-to-understand advice.\n\
         The user wants to improve their financial health, save more money, and identify \
         potential issues.\n\
         Focus on spending patterns, income vs. expense balance, and categorization.\n\
         Present the advice in a friendly and encouraging tone. Use markdown for \
         formatting (e.g., lists, bold text).\n\
         {language_instruction}\n\n\
         Here are the transactions in JSON format:\n\
         {serialized}\n"
    )
}

fn request_advice(api_key: &str, prompt: &str) -> anyhow::Result<String> {
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent"
    );
    let body = serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    });

    let res: serde_json::Value = reqwest::blocking::Client::new()
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .context("request failed")?
        .error_for_status()
        .context("service returned an error status")?
        .json()
        .context("response was not valid JSON")?;

    let text = res["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .context("response contained no text")?;
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::seed_transactions;

    #[test]
    fn test_missing_key_returns_localized_message_without_network() {
        let txns = seed_transactions();
        assert_eq!(
            advice_for_key(None, &txns, Language::En),
            "API key is not configured. Please check the setup."
        );
        assert_eq!(
            advice_for_key(None, &txns, Language::Ar),
            "مفتاح API غير مهيأ. يرجى التحقق من الإعدادات."
        );
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let txns = seed_transactions();
        assert_eq!(
            advice_for_key(Some(""), &txns, Language::En),
            "API key is not configured. Please check the setup."
        );
    }

    #[test]
    fn test_prompt_embeds_transactions_and_language() {
        let txns = seed_transactions();
        let prompt = build_prompt(&txns, Language::Ar);
        assert!(prompt.contains("Please provide the advice in Arabic."));
        assert!(prompt.contains("\"Electric Bill\""));
        assert!(prompt.contains("\"type\": \"expense\""));

        let prompt_en = build_prompt(&txns, Language::En);
        assert!(prompt_en.contains("Please provide the advice in English."));
    }
}
