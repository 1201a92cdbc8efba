use stock_decider::{DecisionType, ScreeningInput, Sentiment, StyleTag, evaluate};

const ALL_SENTIMENTS: [Sentiment; 3] = [
    Sentiment::Neutral,
    Sentiment::Positive,
    Sentiment::Negative,
];

fn input(pe: &str, rsi: &str, sentiment: Sentiment) -> ScreeningInput {
    ScreeningInput {
        pe_ratio: pe.to_string(),
        rsi_ratio: rsi.to_string(),
        sentiment,
        ..Default::default()
    }
}

#[test]
fn bad_pe_is_an_error_naming_pe() {
    for pe in ["0", "-0", "-1.5", "", "abc", "  ", "-Infinity"] {
        let result = evaluate(&input(pe, "50", Sentiment::Neutral));
        assert_eq!(result.decision_type, DecisionType::Error, "pe = {:?}", pe);
        assert_eq!(result.style, StyleTag::Error);
        assert!(result.reason.contains("PE"), "pe = {:?}", pe);
    }
}

#[test]
fn bad_rsi_is_an_error_naming_rsi() {
    for rsi in ["-0.01", "100.5", "150", "", "x12", "Infinity"] {
        let result = evaluate(&input("12", rsi, Sentiment::Positive));
        assert_eq!(result.decision_type, DecisionType::Error, "rsi = {:?}", rsi);
        assert!(result.reason.contains("RSI"), "rsi = {:?}", rsi);
        assert!(!result.reason.contains("PE"), "rsi = {:?}", rsi);
    }
}

#[test]
fn cheap_and_oversold_is_buy_whatever_the_sentiment() {
    for sentiment in ALL_SENTIMENTS {
        let result = evaluate(&input("8", "20", sentiment));
        assert_eq!(result.decision_type, DecisionType::Buy);
        assert_eq!(result.style, StyleTag::Buy);
    }
}

#[test]
fn expensive_and_overbought_is_not_buy_whatever_the_sentiment() {
    for sentiment in ALL_SENTIMENTS {
        let result = evaluate(&input("30", "75", sentiment));
        assert_eq!(result.decision_type, DecisionType::NotBuy);
        assert_eq!(result.style, StyleTag::NotBuy);
    }
}

#[test]
fn middle_zone_follows_sentiment() {
    let positive = evaluate(&input("15", "40", Sentiment::Positive));
    assert_eq!(positive.decision_type, DecisionType::Buy);
    assert!(positive.reason.contains("Positive"));

    let negative = evaluate(&input("15", "40", Sentiment::Negative));
    assert_eq!(negative.decision_type, DecisionType::NotBuy);
    assert!(negative.reason.contains("Negative"));

    let neutral = evaluate(&input("15", "40", Sentiment::Neutral));
    assert_eq!(neutral.decision_type, DecisionType::NoDecision);
    assert_eq!(neutral.style, StyleTag::NoDecision);
    assert!(neutral.reason.contains("Neutral"));
}

#[test]
fn cheap_but_not_oversold_falls_back_to_no_decision() {
    for sentiment in ALL_SENTIMENTS {
        let result = evaluate(&input("5", "50", sentiment));
        assert_eq!(result.decision_type, DecisionType::NoDecision);
        assert!(result.reason.contains("inspect manually"));
    }
}

#[test]
fn custom_thresholds_move_the_strong_buy_zone() {
    let mut draft = input("15", "40", Sentiment::Negative);
    draft.pe_threshold = "20".to_string();
    draft.rsi_threshold = "45".to_string();
    assert_eq!(evaluate(&draft).decision_type, DecisionType::Buy);

    // Zero and junk thresholds mean "use the defaults" again.
    draft.pe_threshold = "0".to_string();
    draft.rsi_threshold = "junk".to_string();
    assert_eq!(evaluate(&draft).decision_type, DecisionType::NotBuy);
}

#[test]
fn evaluation_is_repeatable() {
    let mut draft = input("15", "40", Sentiment::Positive);
    draft.company_code = "dial".to_string();
    draft.notes = "watch the dividend".to_string();
    assert_eq!(evaluate(&draft), evaluate(&draft));
}

#[test]
fn company_code_prefixes_every_title() {
    let cases = [
        ("abc", "50"), // Error on PE
        ("12", "150"), // Error on RSI
        ("8", "20"),   // Buy
        ("30", "75"),  // NotBuy
        ("5", "50"),   // NoDecision
    ];
    for (pe, rsi) in cases {
        let mut draft = input(pe, rsi, Sentiment::Neutral);
        draft.company_code = " lolc ".to_string();
        let result = evaluate(&draft);
        assert!(
            result.title.starts_with("(LOLC) "),
            "{:?} title was {:?}",
            result.decision_type,
            result.title
        );
    }
}

#[test]
fn blank_company_code_leaves_title_unprefixed() {
    let result = evaluate(&input("8", "20", Sentiment::Neutral));
    assert!(!result.title.starts_with('('));
    assert!(!result.title.starts_with(' '));
}

#[test]
fn numbers_are_read_like_a_browser_form() {
    // Trailing junk after a number is ignored.
    assert_eq!(
        evaluate(&input("8x", "20 pts", Sentiment::Neutral)).decision_type,
        DecisionType::Buy
    );
}
