use stock_forecast::news::{RawArticle, SentimentScorer};

fn article(title: &str, description: &str) -> RawArticle {
    RawArticle {
        title: title.to_string(),
        description: Some(description.to_string()),
        url: Some("https://example.com/a".to_string()),
    }
}

#[test]
fn empty_list_aggregates_to_exactly_zero() {
    let scorer = SentimentScorer::new();
    let (items, avg) = scorer.score_articles(&[]);
    assert!(items.is_empty());
    assert_eq!(avg, 0.0);
}

#[test]
fn scores_stay_within_unit_interval() {
    let scorer = SentimentScorer::new();
    let articles = vec![
        article("Excellent quarter", "Investors happy and optimistic about great profits"),
        article("Terrible collapse", "Awful fraud scandal hurts shareholders badly"),
        article("Quarterly report released", "The company published its quarterly figures"),
    ];
    let (items, avg) = scorer.score_articles(&articles);
    assert_eq!(items.len(), 3);
    for item in &items {
        assert!(item.sentiment >= -1.0 && item.sentiment <= 1.0);
    }
    assert!(avg >= -1.0 && avg <= 1.0);
}

#[test]
fn polarity_direction_matches_wording() {
    let scorer = SentimentScorer::new();
    let positive = scorer.compound("Excellent news, investors are happy and optimistic");
    let negative = scorer.compound("Terrible losses, awful fraud scandal");
    assert!(positive > 0.0, "正面文本得分 {}", positive);
    assert!(negative < 0.0, "负面文本得分 {}", negative);
}

#[test]
fn blank_text_is_neutral() {
    let scorer = SentimentScorer::new();
    assert_eq!(scorer.compound(""), 0.0);
    assert_eq!(scorer.compound("   "), 0.0);
}

#[test]
fn item_fields_are_preserved() {
    let scorer = SentimentScorer::new();
    let articles = vec![article("Some headline", "Some description")];
    let (items, _) = scorer.score_articles(&articles);
    assert_eq!(items[0].title, "Some headline");
    assert_eq!(items[0].description, "Some description");
    assert_eq!(items[0].url.as_deref(), Some("https://example.com/a"));
}
