use social_input::{ActiveSource, SocialConfig, SocialTextField, SocialView, SuggestionList};

#[test]
fn end_to_end_hashtag_and_mention_completion() {
    let mut field = SocialTextField::new(SocialConfig::new(true, true));
    field.set_hashtag_source(SuggestionList::new(vec![
        "tag".to_string(),
        "taxi".to_string(),
        "rust".to_string(),
    ]));
    field.set_mention_source(SuggestionList::new(vec![
        "user".to_string(),
        "udon".to_string(),
    ]));

    for c in "hello #ta".chars() {
        field.insert_char(c);
    }
    assert_eq!(field.active_source(), ActiveSource::Hashtag);
    assert_eq!(field.current_token(), "ta");
    assert_eq!(field.suggestions(), vec!["tag", "taxi"]);

    field
        .commit_suggestion("tag")
        .expect("hashtag source is active");
    assert_eq!(field.text(), "hello #tag ");
    assert_eq!(field.cursor(), 11);

    for c in "@u".chars() {
        field.insert_char(c);
    }
    assert_eq!(field.active_source(), ActiveSource::Mention);
    assert_eq!(field.suggestions(), vec!["user", "udon"]);

    field
        .commit_suggestion("user")
        .expect("mention source is active");
    assert_eq!(field.text(), "hello #tag @user ");
    assert_eq!(field.cursor(), 17);
}

#[test]
fn toggling_capabilities_reconfigures_the_tokenizer() {
    let mut field = SocialTextField::new(SocialConfig::new(true, false));
    field.set_hashtag_source(SuggestionList::new(vec!["tag".to_string()]));

    for c in "#ta".chars() {
        field.insert_char(c);
    }
    assert_eq!(field.suggestions(), vec!["tag"]);

    // With hashtag support off, `#` stops being a token boundary and the
    // whole buffer becomes one token.
    field.set_hashtag_enabled(false);
    assert_eq!(field.current_token(), "#ta");

    field.set_hashtag_enabled(true);
    assert_eq!(field.current_token(), "ta");
}
