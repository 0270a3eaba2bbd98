// contact.rs
use crate::domain::Listing;
use url::Url;

/// What a visitor typed into the contact modal. Never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDraft {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    /// Builds a draft from `name=..&email=..&phone=..` (query string or form body).
    pub fn from_form(encoded: &[u8]) -> Self {
        let mut draft = Self::default();
        for (key, value) in url::form_urlencoded::parse(encoded) {
            match key.as_ref() {
                "name" => draft.name = value.into_owned(),
                "email" => draft.email = value.into_owned(),
                "phone" => draft.phone = value.into_owned(),
                _ => {}
            }
        }
        draft
    }

    /// True exactly when all three fields and the target number are non-empty.
    /// Whitespace counts as typed input.
    pub fn can_submit(&self, target: Option<&str>) -> bool {
        [
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            target.unwrap_or_default(),
        ]
        .iter()
        .all(|v| !v.is_empty())
    }
}

/// Builds messaging deep links for contact requests.
#[derive(Debug, Clone)]
pub struct ContactComposer {
    messaging_domain: String,
}

impl ContactComposer {
    pub fn new(messaging_domain: impl Into<String>) -> Self {
        Self {
            messaging_domain: messaging_domain.into(),
        }
    }

    /// `https://{domain}/{digits}?text={message}`, or `None` when the draft
    /// cannot be submitted for this listing.
    pub fn deep_link(&self, draft: &ContactDraft, listing: &Listing) -> Option<Url> {
        let target = listing.contact_number();
        if !draft.can_submit(target) {
            return None;
        }

        let number = digits_only(target?);
        if number.is_empty() {
            return None;
        }

        let message = compose_message(draft, &listing.title, &listing.id);
        let link = format!(
            "https://{}/{}?text={}",
            self.messaging_domain,
            number,
            urlencoding::encode(&message)
        );
        Url::parse(&link).ok()
    }

    /// Composes the link and hands it to `open`. Returns `false` without
    /// calling `open` when there is nothing to send.
    pub fn submit<F>(&self, draft: &ContactDraft, listing: &Listing, open: F) -> bool
    where
        F: FnOnce(Url),
    {
        match self.deep_link(draft, listing) {
            Some(url) => {
                open(url);
                true
            }
            None => false,
        }
    }
}

pub fn digits_only(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

pub fn compose_message(draft: &ContactDraft, title: &str, id: &str) -> String {
    format!(
        "Olá! Meu nome é {}.\nEmail: {}\nTelefone: {}\nTenho interesse no imóvel: {} - ID: {}",
        draft.name, draft.email, draft.phone, title, id
    )
}
