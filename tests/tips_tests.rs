use cyberbot::models::Topic;
use cyberbot::tips::{label, tips_for, TipCatalog};

#[test]
fn test_tip_starts_with_topic_label() {
    let mut catalog = TipCatalog::seeded(7);
    for topic in Topic::ALL {
        for _ in 0..20 {
            let tip = catalog.tip(topic);
            assert!(tip.starts_with(label(topic)), "{tip}");
            let body = &tip[label(topic).len()..];
            assert!(tips_for(topic).contains(&body));
        }
    }
}

#[test]
fn test_labels() {
    assert_eq!(label(Topic::Password), "Password Safety Tip: ");
    assert_eq!(label(Topic::Phishing), "Phishing Tip: ");
    assert_eq!(label(Topic::Browsing), "Safe Browsing Tip: ");
}

#[test]
fn test_same_seed_same_tips() {
    let mut a = TipCatalog::seeded(42);
    let mut b = TipCatalog::seeded(42);
    for _ in 0..10 {
        assert_eq!(a.tip(Topic::Phishing), b.tip(Topic::Phishing));
    }
}

#[test]
fn test_topic_aliases() {
    assert_eq!(Topic::from_key("password safety"), Some(Topic::Password));
    assert_eq!(Topic::from_key("Safe Browsing"), Some(Topic::Browsing));
    assert_eq!(Topic::from_key("browsing"), Some(Topic::Browsing));
    assert_eq!(Topic::from_key("malware"), None);
}
