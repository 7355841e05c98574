use crate::models::Sentiment;

/// Keyword table in priority order; the first row with a hit wins.
const SENTIMENT_TABLE: &[(Sentiment, &[&str])] = &[
    (Sentiment::Anxious, &["worried", "anxious", "scared"]),
    (Sentiment::Curious, &["curious", "interested"]),
    (Sentiment::Frustrated, &["frustrated", "confused", "overwhelmed"]),
];

/// Classifies `text` by case-insensitive substring match.
pub fn classify(text: &str) -> Option<Sentiment> {
    let lowered = text.to_lowercase();
    SENTIMENT_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(sentiment, _)| *sentiment)
}

/// Opening line the assistant answers a detected sentiment with.
pub fn response(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Anxious => "It's completely understandable to feel that way. Scammers can be very convincing. Let me share some tips to help you stay safe.",
        Sentiment::Curious => "I'm glad you're curious! Cybersecurity knowledge is power. What would you like to learn more about?",
        Sentiment::Frustrated => "No worries, these topics can be tricky. I'm here to help — feel free to ask for explanations or examples anytime.",
    }
}
