use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::models::Topic;

const PASSWORD_TIPS: [&str; 5] = [
    "Use a mix of uppercase, lowercase, numbers, and special characters in your passwords.",
    "Never reuse passwords across different accounts – if one gets compromised, others could too.",
    "Use a password manager to generate and store complex passwords securely.",
    "Avoid using easily guessable info like birthdays or pet names in your passwords.",
    "Enable two-factor authentication (2FA) for an added layer of security.",
];

const PHISHING_TIPS: [&str; 5] = [
    "Be cautious of emails asking for personal information. Scammers often disguise themselves as trusted organisations.",
    "Check the sender's email address closely – phishing emails often use misspelled or lookalike domains.",
    "Avoid clicking on suspicious links or downloading attachments from unknown senders.",
    "Phishing messages often create a sense of urgency. Stay calm and verify the message before acting.",
    "Look for generic greetings like 'Dear Customer' – legitimate companies usually address you by name.",
];

const BROWSING_TIPS: [&str; 5] = [
    "Always look for 'https://' in the URL to ensure a secure connection.",
    "Avoid clicking on pop-ups or ads that seem too good to be true.",
    "Use an up-to-date antivirus and keep your browser patched.",
    "Don’t enter sensitive information on unfamiliar websites.",
    "Be cautious when using public Wi-Fi – avoid logging into bank accounts or private systems.",
];

/// Label every tip for `topic` starts with.
pub fn label(topic: Topic) -> &'static str {
    match topic {
        Topic::Password => "Password Safety Tip: ",
        Topic::Phishing => "Phishing Tip: ",
        Topic::Browsing => "Safe Browsing Tip: ",
    }
}

/// The fixed tip list for `topic`.
pub fn tips_for(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Password => &PASSWORD_TIPS,
        Topic::Phishing => &PHISHING_TIPS,
        Topic::Browsing => &BROWSING_TIPS,
    }
}

/// Definitional paragraph answered for "what is <topic>".
pub fn definition(topic: Topic) -> &'static str {
    match topic {
        Topic::Password => "📖 *Password safety* refers to best practices for creating, storing, and managing passwords to protect your online accounts from unauthorized access.",
        Topic::Phishing => "📖 *Phishing* is a type of cyberattack where attackers impersonate trusted sources (like banks or companies) to trick people into revealing personal information such as passwords, credit card numbers, or login credentials.",
        Topic::Browsing => "📖 *Safe browsing* means using the internet in a secure way — avoiding suspicious links, using HTTPS sites, and protecting your privacy and data while online.",
    }
}

/// Hands out one random tip per call, with replacement.
pub struct TipCatalog {
    rng: StdRng,
}

impl TipCatalog {
    /// Catalog backed by an OS-seeded generator.
    pub fn new() -> Self {
        TipCatalog { rng: StdRng::from_entropy() }
    }

    /// Catalog with a fixed seed, so the sequence of tips is reproducible.
    pub fn seeded(seed: u64) -> Self {
        TipCatalog { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn tip(&mut self, topic: Topic) -> String {
        let tips = tips_for(topic);
        let pick = tips[self.rng.gen_range(0..tips.len())];
        format!("{}{}", label(topic), pick)
    }
}

impl Default for TipCatalog {
    fn default() -> Self {
        Self::new()
    }
}
