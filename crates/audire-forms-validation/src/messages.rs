//! User-facing messages shown by the forms.
//!
//! The exact text is part of what users and the page stylesheet see, so the
//! strings live in one place.

/// Shown when at least one visible field fails validation.
pub const FIELDS_HIGHLIGHTED: &str = "Compila correttamente i campi evidenziati.";

pub const PASSWORDS_MISMATCH: &str = "Le password non coincidono.";

pub const EMAIL_INVALID: &str = "Email non valida.";

pub const PASSWORD_WEAK: &str =
    "Password debole (min 8 caratteri, Maiuscola, Minuscola, Numero, Speciale).";

pub const CV_NOT_PDF: &str = "Il CV deve essere in formato PDF.";

/// Phone length message for the configured number of digits.
pub fn phone_length(digits: usize) -> String {
    format!("Il numero di telefono deve essere composto da {} cifre.", digits)
}

/// Deadline message for the configured lead time.
pub fn deadline_too_soon(lead_days: u32) -> String {
    match lead_days {
        7 => "La data di scadenza deve essere almeno tra una settimana.".to_string(),
        1 => "La data di scadenza deve essere almeno tra un giorno.".to_string(),
        n => format!("La data di scadenza deve essere almeno tra {} giorni.", n),
    }
}
