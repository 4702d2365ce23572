use email_reply_parser::*;
use proptest::prelude::*;

const LINE_POOL: &[&str] = &[
    "Hello",
    "Thanks!",
    "",
    "   ",
    "> quoted",
    ">> deeper",
    "On Jan 1, 2020, Bob wrote:",
    "--",
    "-- ",
    "John Doe",
    "Sent from my iPhone",
    "well-",
    "On Mon, Jan 1, 2020 at 10:00 AM, Bob <bob@example.com>",
    "wrote:",
    "Hans Mueller <h@x.de>",
    "schrieb:",
];

const REPLY_POOL: &[&str] = &["Hello", "Thanks!", "Danke", "See you Friday"];

const QUOTE_POOL: &[&str] = &["> old", ">> older"];

const HEADER_POOL: &[&str] = &[
    "On Jan 1, 2020, Bob wrote:",
    "On Mon, Jan 1, 2020 at 10:00 AM, Bob <bob@example.com>\nwrote:",
    "Hans Mueller <h@x.de>\nschrieb:",
    "Am 01.01.2020 um 10:00 schrieb Bob Smith:",
];

fn non_blank(text: &str) -> Vec<&str> {
    text.split('\n').filter(|line| !is_blank(line)).collect()
}

fn message() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(LINE_POOL), 0..24).prop_map(|lines| lines.join("\n"))
}

/// Reply text, an optional blank separator, a quote header and the quote
fn reply_with_quote() -> impl Strategy<Value = (Vec<&'static str>, String)> {
    (
        prop::collection::vec(prop::sample::select(REPLY_POOL), 1..6),
        any::<bool>(),
        prop::sample::select(HEADER_POOL),
        prop::collection::vec(prop::sample::select(QUOTE_POOL), 1..4),
    )
        .prop_map(|(reply, separated, header, quote)| {
            let mut lines = reply.clone();
            if separated {
                lines.push("");
            }
            lines.push(header);
            lines.extend(quote);
            (reply, lines.join("\n"))
        })
}

proptest! {
    #[test]
    fn test_every_line_kept_in_order(text in message()) {
        let email = parse(&text);
        let from_fragments: Vec<&str> = email
            .fragments()
            .iter()
            .flat_map(|f| non_blank(f.content()))
            .collect();

        let joined =
            join_wrapped_quote_headers(&text, &QuoteHeaders::default(), DEFAULT_HEADER_WRAP_LIMIT);
        prop_assert_eq!(from_fragments, non_blank(&joined));
    }

    #[test]
    fn test_reply_above_quote_stays_visible((reply, text) in reply_with_quote()) {
        prop_assert_eq!(parse(&text).visible_text(), reply.join("\n"));
    }

    #[test]
    fn test_hidden_iff_quoted_signature_or_blank(text in message()) {
        for fragment in &parse(&text) {
            let expected = fragment.is_quoted() || fragment.is_signature() || fragment.is_empty();
            prop_assert_eq!(fragment.is_hidden(), expected);
        }
    }

    #[test]
    fn test_at_least_one_fragment(text in message()) {
        prop_assert!(!parse(&text).is_empty());
    }

    #[test]
    fn test_quoted_lines_never_visible(text in message()) {
        let email = parse(&text);
        for fragment in email.visible_fragments() {
            prop_assert!(fragment.lines().all(|line| !is_quote_marker(line)));
        }
    }

    #[test]
    fn test_parse_is_deterministic(text in message()) {
        prop_assert_eq!(parse(&text), parse(&text));
    }
}
