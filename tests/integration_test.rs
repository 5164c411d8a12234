use sentiment_rs::{
    Analyzer, LexiconSubjectivity, SentimentLabel, SentimentModel, SubjectivityLabel,
    SubjectivityModel, VaderModel,
};

fn lexicon_analyzer() -> sentiment_rs::Result<Analyzer<VaderModel, LexiconSubjectivity>> {
    Analyzer::with_lexicon_models()
}

#[test]
fn test_example_sentence() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = lexicon_analyzer()?;
    let result = analyzer.analyze("I absolutely love this innovative project!")?;

    // ストップワードが除去され、見出し語化されていること
    let cleaned: Vec<&str> = result.cleaned_text().split(' ').collect();
    assert!(!cleaned.contains(&"this"));
    assert!(!cleaned.contains(&"i"));
    assert!(cleaned.contains(&"love"));
    assert!(cleaned.contains(&"project"));

    assert_eq!(result.sentiment_label(), SentimentLabel::Positive);
    assert!(result.compound_score() > 0.05);
    assert_eq!(result.subjectivity_label(), SubjectivityLabel::Subjective);
    Ok(())
}

#[test]
fn test_negative_sentence() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = lexicon_analyzer()?;
    let result = analyzer.analyze("The service was terrible and the food was awful.")?;

    assert_eq!(result.sentiment_label(), SentimentLabel::Negative);
    assert!(result.compound_score() < -0.05);
    Ok(())
}

#[test]
fn test_empty_input_is_degenerate() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = lexicon_analyzer()?;
    let result = analyzer.analyze("")?;

    assert_eq!(result.cleaned_text(), "");
    assert_eq!(result.sentiment_label(), SentimentLabel::Neutral);
    assert_eq!(result.subjectivity_label(), SubjectivityLabel::Objective);
    assert_eq!(result.neu_score(), 1.0);
    Ok(())
}

#[test]
fn test_score_invariants_hold() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = lexicon_analyzer()?;
    let inputs = vec![
        "",
        "...",
        "The report was published on Monday.",
        "What a wonderful, wonderful day!",
        "I hate waiting, but the staff were very kind.",
        "Not bad at all.",
        "NEVER buying this again!!!",
        "東京は大きい都市です",
    ];

    for input in inputs {
        let result = analyzer.analyze(input)?;

        let total = result.pos_score() + result.neg_score() + result.neu_score();
        assert!((total - 1.0).abs() < 0.01, "{:?}: components sum to {}", input, total);

        let compound = result.compound_score();
        assert!((-1.0..=1.0).contains(&compound));
        let expected = if compound > 0.05 {
            SentimentLabel::Positive
        } else if compound < -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        assert_eq!(result.sentiment_label(), expected, "{:?}", input);

        assert!((0.0..=1.0).contains(&result.subjectivity_score()));
    }
    Ok(())
}

#[test]
fn test_models_score_raw_text() -> Result<(), Box<dyn std::error::Error>> {
    // 正規化で消える句読点・大文字が極性に影響すること
    let vader = VaderModel::new();
    let plain = vader.polarity_scores("this is good")?;
    let emphatic = vader.polarity_scores("this is GOOD!!!")?;
    assert!(emphatic.compound > plain.compound);

    let subjectivity = LexiconSubjectivity::bundled()?;
    assert!(subjectivity.subjectivity("a very good idea")? > subjectivity.subjectivity("a good idea")?);
    Ok(())
}

#[test]
fn test_normalizer_idempotent_on_reports() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = lexicon_analyzer()?;
    let result = analyzer.analyze("Our teams shipped the new features; customers are thrilled!")?;

    let again = analyzer.normalizer().normalize(result.cleaned_text());
    assert_eq!(again, result.cleaned_text());
    Ok(())
}
