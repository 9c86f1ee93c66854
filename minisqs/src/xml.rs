//! XML extraction for queue responses
//!
//! The receive-message schema is shallow and fixed, so responses are scanned
//! by tag rather than run through a full XML parser.

use tracing::warn;

/// One message pulled off the queue
///
/// Fully owned by the caller; the receipt handle is the single-use token a
/// later delete needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    /// Message text, entity-unescaped
    pub body: String,
    pub receipt_handle: String,
    pub message_id: String,
}

/// Decode every `<Message>` block of a receive response, in document order
///
/// A block missing its `<Body>` (or either of the other two fields) is
/// skipped with a diagnostic; later blocks still decode. An empty response
/// decodes to an empty vector.
pub fn decode_messages(body: &str) -> Vec<ReceivedMessage> {
    let mut messages = Vec::new();

    for block in message_blocks(body) {
        let text = element_text(block, "Body");
        let receipt_handle = element_text(block, "ReceiptHandle");
        let message_id = element_text(block, "MessageId");

        match (text, receipt_handle, message_id) {
            (Some(text), Some(receipt_handle), Some(message_id)) => {
                messages.push(ReceivedMessage {
                    body: unescape_xml(text),
                    receipt_handle: receipt_handle.to_string(),
                    message_id: message_id.to_string(),
                });
            }
            _ => warn!(block = %block, "Skipping message block with missing fields"),
        }
    }

    messages
}

/// Iterate the `<Message>...</Message>` blocks of a response body
fn message_blocks(body: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = body;
    std::iter::from_fn(move || {
        let start = rest.find("<Message>")?;
        let after = &rest[start + "<Message>".len()..];
        let end = after.find("</Message>")?;
        rest = &after[end + "</Message>".len()..];
        Some(&after[..end])
    })
}

/// Extract the text of the first `<tag>` element, if present
pub(crate) fn element_text<'a>(body: &'a str, tag: &str) -> Option<&'a str> {
    let open_tag = format!("<{}>", tag);
    let close_tag = format!("</{}>", tag);

    let start = body.find(&open_tag)? + open_tag.len();
    let end = body[start..].find(&close_tag)?;
    Some(&body[start..start + end])
}

/// Reverse entity encoding in extracted text
///
/// Single pass: `&amp;` resolves last, so `&amp;lt;` comes out as `&lt;`
/// rather than `<`.
pub fn unescape_xml(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_two_messages_in_document_order() {
        let body = "<ReceiveMessageResponse><ReceiveMessageResult>\
            <Message><MessageId>id-1</MessageId><ReceiptHandle>rh-1</ReceiptHandle>\
            <MD5OfBody>abc</MD5OfBody><Body>first &quot;one&quot;</Body></Message>\
            <Message><MessageId>id-2</MessageId><ReceiptHandle>rh-2</ReceiptHandle>\
            <MD5OfBody>def</MD5OfBody><Body>second &lt;b&gt;</Body></Message>\
            </ReceiveMessageResult></ReceiveMessageResponse>";

        let messages = decode_messages(body);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body, "first \"one\"");
        assert_eq!(messages[0].receipt_handle, "rh-1");
        assert_eq!(messages[0].message_id, "id-1");
        assert_eq!(messages[1].body, "second <b>");
        assert_eq!(messages[1].receipt_handle, "rh-2");
        assert_eq!(messages[1].message_id, "id-2");
    }

    #[test]
    fn test_block_without_body_is_skipped_not_fatal() {
        let body = "<ReceiveMessageResponse><ReceiveMessageResult>\
            <Message><MessageId>id-1</MessageId><ReceiptHandle>rh-1</ReceiptHandle></Message>\
            <Message><MessageId>id-2</MessageId><ReceiptHandle>rh-2</ReceiptHandle>\
            <Body>kept</Body></Message>\
            </ReceiveMessageResult></ReceiveMessageResponse>";

        let messages = decode_messages(body);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message_id, "id-2");
        assert_eq!(messages[0].body, "kept");
    }

    #[test]
    fn test_empty_response_decodes_to_empty_vec() {
        let body = "<ReceiveMessageResponse><ReceiveMessageResult>\
            </ReceiveMessageResult></ReceiveMessageResponse>";

        assert!(decode_messages(body).is_empty());
    }

    #[test]
    fn test_decode_is_restartable() {
        let body = "<Message><MessageId>id</MessageId><ReceiptHandle>rh</ReceiptHandle>\
            <Body>text</Body></Message>";

        assert_eq!(decode_messages(body), decode_messages(body));
    }

    #[test]
    fn test_unescape_known_entities() {
        assert_eq!(
            unescape_xml("&quot;a&quot; &lt;b&gt; c&amp;d &apos;e&apos;"),
            "\"a\" <b> c&d 'e'"
        );
    }

    #[test]
    fn test_unescape_leaves_plain_text_unchanged() {
        assert_eq!(unescape_xml("no entities here"), "no entities here");
    }

    #[test]
    fn test_unescape_is_single_pass() {
        // A double-escaped entity unescapes one level only.
        assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
        assert_eq!(unescape_xml("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_element_text_missing_tag() {
        assert_eq!(element_text("<A>x</A>", "B"), None);
    }
}
