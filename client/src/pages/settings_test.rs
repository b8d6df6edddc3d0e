use super::*;

#[test]
fn saved_feedback_mentions_new_interval() {
    let outcome = CarouselSpeed::new(5000);
    let feedback = SaveFeedback::from_outcome(&outcome);
    assert_eq!(feedback, SaveFeedback::Saved("Saved. Carousel rotates every 5000 ms.".to_owned()));
    assert_eq!(feedback.class(), "settings-message settings-message--ok");
}

#[test]
fn invalid_feedback_carries_validation_message() {
    let feedback = SaveFeedback::from_outcome(&Err(SettingsError::NonPositive(0)));
    assert_eq!(feedback.text(), "carousel speed must be positive, got 0");
    assert_eq!(feedback.class(), "settings-message settings-message--error");
}

#[test]
fn invalid_feedback_for_text_input() {
    let feedback = SaveFeedback::from_outcome(&CarouselSpeed::parse("fast"));
    assert_eq!(
        feedback.text(),
        "carousel speed must be a whole number of milliseconds, got \"fast\""
    );
}
