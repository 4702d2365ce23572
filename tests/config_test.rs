use email_reply_parser::*;

#[test]
fn test_default_config() {
    let config = ParserConfig::default();

    assert_eq!(config.quote_headers.len(), DEFAULT_QUOTE_HEADERS.len());
    assert_eq!(config.quote_headers[0], DEFAULT_QUOTE_HEADERS[0]);
    assert_eq!(config.header_wrap_limit, DEFAULT_HEADER_WRAP_LIMIT);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_json_partial() {
    let config = ParserConfig::from_json(r#"{ "header_wrap_limit": 2 }"#).unwrap();

    assert_eq!(config.header_wrap_limit, 2);
    assert_eq!(config.quote_headers, ParserConfig::default().quote_headers);
}

#[test]
fn test_config_from_json_headers() {
    let config = ParserConfig::from_json(r#"{ "quote_headers": ["^Bob said:$"] }"#).unwrap();
    let parser = EmailReplyParser::from_config(&config).unwrap();

    assert_eq!(parser.quote_headers().len(), 1);
    assert_eq!(parser.header_wrap_limit(), DEFAULT_HEADER_WRAP_LIMIT);
    assert_eq!(parser.parse_reply("Ok\n\nBob said:\n> hi"), "Ok");
}

#[test]
fn test_config_malformed_json() {
    let result = ParserConfig::from_json("{ quote_headers: ");
    assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
}

#[test]
fn test_config_zero_wrap_limit() {
    let result = ParserConfig::from_json(r#"{ "header_wrap_limit": 0 }"#);
    assert!(matches!(result, Err(ConfigError::InvalidHeaderWrapLimit(0))));

    let config = ParserConfig {
        header_wrap_limit: 0,
        ..ParserConfig::default()
    };
    assert!(matches!(
        EmailReplyParser::from_config(&config),
        Err(ConfigError::InvalidHeaderWrapLimit(0))
    ));
}

#[test]
fn test_config_bad_pattern() {
    let config = ParserConfig {
        quote_headers: vec!["(oops".to_string()],
        ..ParserConfig::default()
    };

    let err = EmailReplyParser::from_config(&config).unwrap_err();
    assert!(err.to_string().contains("(oops"));
}

#[test]
fn test_config_serializes() {
    let json = serde_json::to_string(&ParserConfig::default()).unwrap();
    let config = ParserConfig::from_json(&json).unwrap();

    assert_eq!(config, ParserConfig::default());
}
