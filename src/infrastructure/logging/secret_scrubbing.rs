use regex::{Captures, Regex};
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

/// Redacts signed tokens and secrets from text before it is written out
#[derive(Clone)]
pub struct SecretScrubber {
    jwt_pattern: Regex,
    bearer_pattern: Regex,
    field_pattern: Regex,
}

impl SecretScrubber {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            // header.payload.signature, header and payload are base64url JSON objects
            jwt_pattern: Regex::new(r"eyJ[A-Za-z0-9_-]*\.eyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*")?,
            bearer_pattern: Regex::new(r"Bearer\s+[A-Za-z0-9\-_.~+/]+=*")?,
            field_pattern: Regex::new(
                r#"(?P<key>["']?(?:secret|token|password)["']?\s*[:=]\s*)(?P<quote>["']?)[^"'\s,}]+["']?"#,
            )?,
        })
    }

    /// Scrub a message of sensitive data
    pub fn scrub(&self, message: &str) -> String {
        let scrubbed = self.jwt_pattern.replace_all(message, "[JWT_REDACTED]");
        let scrubbed = self
            .bearer_pattern
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]");
        self.field_pattern
            .replace_all(&scrubbed, |caps: &Captures| {
                format!("{}{quote}[REDACTED]{quote}", &caps["key"], quote = &caps["quote"])
            })
            .into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}

/// `MakeWriter` that scrubs every formatted event before handing it on
#[derive(Debug, Clone)]
pub struct ScrubbingMakeWriter<M> {
    inner: M,
    scrubber: Arc<SecretScrubber>,
}

impl<M> ScrubbingMakeWriter<M> {
    pub fn new(inner: M, scrubber: Arc<SecretScrubber>) -> Self {
        Self { inner, scrubber }
    }
}

impl<'a, M> MakeWriter<'a> for ScrubbingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = ScrubbingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        ScrubbingWriter {
            inner: self.inner.make_writer(),
            scrubber: Arc::clone(&self.scrubber),
        }
    }
}

/// Writer half of [`ScrubbingMakeWriter`]
///
/// The fmt layer writes each event with a single call, so scrubbing per
/// write sees whole lines.
pub struct ScrubbingWriter<W> {
    inner: W,
    scrubber: Arc<SecretScrubber>,
}

impl<W: Write> Write for ScrubbingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.inner
            .write_all(self.scrubber.scrub(&text).as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
