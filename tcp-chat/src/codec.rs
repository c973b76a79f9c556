use crate::models::session::SessionId;
use bytes::BytesMut;
use log::warn;
use tokio_util::codec::{Decoder, LinesCodec, LinesCodecError};

/// Splits client input into lines. Lines longer than the limit are skipped
/// and decoding continues with the next line, so a single bad line does not
/// end the connection.
#[derive(Debug)]
pub struct BoundedLineCodec {
    lines: LinesCodec,
    max_length: usize,
    session_id: SessionId,
}

impl BoundedLineCodec {
    pub fn new(max_length: usize, session_id: SessionId) -> Self {
        BoundedLineCodec {
            lines: LinesCodec::new_with_max_length(max_length),
            max_length,
            session_id,
        }
    }

    fn discarding(&self) {
        warn!(
            "Session {} sent a line longer than {} bytes, discarding it",
            self.session_id, self.max_length
        );
    }
}

impl Decoder for BoundedLineCodec {
    type Item = String;
    type Error = LinesCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<String>, LinesCodecError> {
        loop {
            match self.lines.decode(buf) {
                Err(LinesCodecError::MaxLineLengthExceeded) => self.discarding(),
                result => return result,
            }
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<String>, LinesCodecError> {
        loop {
            match self.lines.decode_eof(buf) {
                Err(LinesCodecError::MaxLineLengthExceeded) => self.discarding(),
                result => return result,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> BoundedLineCodec {
        BoundedLineCodec::new(8, "1234".to_string())
    }

    #[test]
    fn decodes_lines() {
        let mut codec = codec();
        let mut buf = BytesMut::from("hi\r\n/who\npartial");

        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("hi"));
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("/who"));
        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert_eq!(codec.decode_eof(&mut buf).unwrap().as_deref(), Some("partial"));
    }

    #[test]
    fn skips_over_long_line_in_buffer() {
        let mut codec = codec();
        let mut buf = BytesMut::from("far too long a line\n/info\n");

        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("/info"));
        assert!(buf.is_empty());
    }

    #[test]
    fn skips_over_long_line_across_reads() {
        let mut codec = codec();
        let mut buf = BytesMut::from("far too long");

        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b" still going\nhello\n");
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn over_long_tail_at_eof_is_dropped() {
        let mut codec = codec();
        let mut buf = BytesMut::from("far too long");

        assert!(codec.decode_eof(&mut buf).unwrap().is_none());
    }
}
