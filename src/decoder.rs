//! # Sentence Dispatch
//!
//! This module routes raw lines to the decoder of their sentence type and
//! turns a sequence of lines into a lazy sequence of decoded sentences.

use std::{
    borrow::Cow,
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    iter::FusedIterator,
    path::Path,
    str::FromStr,
};

use log::{debug, trace};

use crate::{
    Error, Result,
    nmea_content::{Decodable, GGA, GSV, NmeaSentence, RMC},
};

/// Sentence types with a registered decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// Global Positioning System Fix Data
    GGA,
    /// Recommended Minimum Navigation Information
    RMC,
    /// Satellites in View
    GSV,
}

impl SentenceType {
    /// Every registered sentence type, in registration order.
    pub const ALL: [SentenceType; 3] = [SentenceType::GGA, SentenceType::RMC, SentenceType::GSV];

    /// Line prefix of the sentence type, e.g. `$GPGGA`.
    pub fn tag(&self) -> &'static str {
        match self {
            SentenceType::GGA => GGA::TAG,
            SentenceType::RMC => RMC::TAG,
            SentenceType::GSV => GSV::TAG,
        }
    }

    fn decode(&self, line: &str) -> Result<NmeaSentence> {
        match self {
            SentenceType::GGA => GGA::decode(line).map(NmeaSentence::GGA),
            SentenceType::RMC => RMC::decode(line).map(NmeaSentence::RMC),
            SentenceType::GSV => GSV::decode(line).map(NmeaSentence::GSV),
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SentenceType {
    type Err = Error;

    /// Accepts the tag with or without its leading `$`.
    fn from_str(s: &str) -> Result<Self> {
        let tag = s.strip_prefix('$').unwrap_or(s);

        SentenceType::ALL
            .into_iter()
            .find(|sentence_type| &sentence_type.tag()[1..] == tag)
            .ok_or_else(|| Error::SentenceNotSupported(s.to_owned()))
    }
}

/// Routes raw NMEA lines to the decoder of their sentence type.
///
/// A decoder is configured once with the sentence types it should decode; every
/// other line is ignored. Decoding holds no state, so one decoder can serve any
/// number of lines and streams.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Decoder, NmeaSentence};
///
/// let decoder = Decoder::new();
/// let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
///
/// match decoder.decode_one(line).unwrap() {
///     Some(NmeaSentence::GGA(gga)) => assert_eq!(gga.satellites_in_use, Some(8)),
///     other => panic!("unexpected {other:?}"),
/// }
///
/// assert!(decoder.decode_one("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoder {
    sentences: Vec<SentenceType>,
}

impl Decoder {
    /// Creates a decoder for every registered sentence type.
    pub fn new() -> Self {
        Decoder {
            sentences: SentenceType::ALL.to_vec(),
        }
    }

    /// Creates a decoder for the given sentence tags, e.g. `["$GPGGA", "$GPRMC"]`.
    ///
    /// # Errors
    ///
    /// [`Error::SentenceNotSupported`] for a tag without a registered decoder.
    ///
    /// ```rust
    /// use nmea0183_decoder::{Decoder, Error};
    ///
    /// assert!(Decoder::with_sentences(["$GPRMC"]).is_ok());
    /// assert!(matches!(
    ///     Decoder::with_sentences(["$GPRMC", "$GPZDA"]),
    ///     Err(Error::SentenceNotSupported(tag)) if tag == "$GPZDA"
    /// ));
    /// ```
    pub fn with_sentences<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        DecoderBuilder::new().sentences(tags).build()
    }

    /// Returns a builder to configure a decoder.
    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::new()
    }

    /// Enabled sentence types, in matching order.
    pub fn sentences(&self) -> &[SentenceType] {
        &self.sentences
    }

    /// Decodes a single raw line.
    ///
    /// Enabled tags are tried in registration order; the first one that
    /// prefixes the line (leading whitespace ignored) selects the decoder.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no enabled tag matches. Unknown or disabled sentence
    /// types are not an error.
    pub fn decode_one(&self, line: &str) -> Result<Option<NmeaSentence>> {
        let sentence = line.trim_start();

        match self
            .sentences
            .iter()
            .find(|sentence_type| sentence.starts_with(sentence_type.tag()))
        {
            Some(sentence_type) => sentence_type.decode(sentence).map(Some),
            None => {
                trace!("no decoder enabled for {:?}", sentence.trim_end());
                Ok(None)
            }
        }
    }

    /// Lazily decodes a sequence of raw lines.
    ///
    /// Lines without an enabled tag are skipped, as are checksum-valid lines
    /// failing with [`Error::InvalidSentenceLength`] or [`Error::InvalidField`].
    /// Any other error is yielded once and ends the stream, since the source
    /// can no longer be trusted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_decoder::{Decoder, Error};
    ///
    /// let lines = [
    ///     "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,*6B", // truncated
    ///     "$GPGLL,4916.45,N,12311.12,W,225444,A*31",                           // not enabled
    ///     "$GPRMC,,V,,,,,,,,,*31",
    ///     "$GPRMC,,V,,,,,,,,,*32",                                             // corrupted
    ///     "$GPRMC,,V,,,,,,,,,*31",
    /// ];
    ///
    /// let decoder = Decoder::new();
    /// let mut sentences = decoder.decode_stream(lines);
    ///
    /// assert!(matches!(sentences.next(), Some(Ok(_))));
    /// assert!(matches!(sentences.next(), Some(Err(Error::InvalidChecksum { .. }))));
    /// assert!(sentences.next().is_none());
    /// ```
    pub fn decode_stream<I>(&self, lines: I) -> Sentences<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: RawLine,
    {
        Sentences {
            decoder: self,
            lines: lines.into_iter(),
            done: false,
        }
    }

    /// Lazily decodes the lines of a buffered reader.
    ///
    /// Read failures are yielded as [`Error::Io`] and end the stream.
    pub fn decode_reader<R: BufRead>(&self, reader: R) -> Sentences<'_, io::Lines<R>> {
        self.decode_stream(reader.lines())
    }

    /// Opens a file and lazily decodes its lines.
    ///
    /// The file is closed when the returned iterator is dropped.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be opened.
    pub fn decode_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Sentences<'_, io::Lines<BufReader<File>>>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!("decoding sentences from {}", path.display());

        Ok(self.decode_reader(BufReader::new(file)))
    }

    fn step(&self, line: &str) -> Option<Result<NmeaSentence>> {
        match self.decode_one(line) {
            Ok(sentence) => sentence.map(Ok),
            Err(e) if e.is_recoverable() => {
                debug!("skipping {:?}: {}", line.trim_end(), e);
                None
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new()
    }
}

/// Configures the sentence types of a [`Decoder`].
///
/// Without any call to [`sentence`](Self::sentence) or
/// [`sentences`](Self::sentences), every registered sentence type is enabled.
///
/// ```rust
/// use nmea0183_decoder::{Decoder, SentenceType};
///
/// let decoder = Decoder::builder().sentence("$GPGSV").sentence("GPGGA").build().unwrap();
/// assert_eq!(decoder.sentences(), [SentenceType::GSV, SentenceType::GGA]);
///
/// let decoder = Decoder::builder().build().unwrap();
/// assert_eq!(decoder.sentences(), SentenceType::ALL);
/// ```
#[must_use]
#[derive(Debug, Default)]
pub struct DecoderBuilder {
    /// Requested tags, in order. `None` selects every registered type.
    tags: Option<Vec<String>>,
}

impl DecoderBuilder {
    /// Creates a builder that enables every registered sentence type.
    pub fn new() -> Self {
        DecoderBuilder { tags: None }
    }

    /// Enables one more sentence tag.
    pub fn sentence<S: AsRef<str>>(mut self, tag: S) -> Self {
        self.tags
            .get_or_insert_with(Vec::new)
            .push(tag.as_ref().to_owned());
        self
    }

    /// Enables every tag of `tags`.
    pub fn sentences<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = self;
        builder.tags.get_or_insert_with(Vec::new);
        for tag in tags {
            builder = builder.sentence(tag);
        }
        builder
    }

    /// Builds the decoder.
    ///
    /// # Errors
    ///
    /// [`Error::SentenceNotSupported`] for the first tag without a registered
    /// decoder.
    pub fn build(self) -> Result<Decoder> {
        let Some(tags) = self.tags else {
            return Ok(Decoder::new());
        };

        let mut sentences = Vec::with_capacity(tags.len());
        for tag in &tags {
            let sentence_type = tag.parse::<SentenceType>()?;
            if !sentences.contains(&sentence_type) {
                sentences.push(sentence_type);
            }
        }

        Ok(Decoder { sentences })
    }
}

/// A raw line as produced by a line source.
///
/// Implemented for borrowed and owned strings, and for the `io::Result<String>`
/// items of [`BufRead::lines`].
pub trait RawLine {
    /// Text of the line.
    type Text: AsRef<str>;

    /// Extracts the line text, or the error of the line source.
    fn into_text(self) -> Result<Self::Text>;
}

impl<'a> RawLine for &'a str {
    type Text = &'a str;

    fn into_text(self) -> Result<Self::Text> {
        Ok(self)
    }
}

impl<'a> RawLine for &'a String {
    type Text = &'a String;

    fn into_text(self) -> Result<Self::Text> {
        Ok(self)
    }
}

impl RawLine for String {
    type Text = String;

    fn into_text(self) -> Result<Self::Text> {
        Ok(self)
    }
}

impl<'a> RawLine for Cow<'a, str> {
    type Text = Cow<'a, str>;

    fn into_text(self) -> Result<Self::Text> {
        Ok(self)
    }
}

impl RawLine for io::Result<String> {
    type Text = String;

    fn into_text(self) -> Result<Self::Text> {
        Ok(self?)
    }
}

/// Lazy, single-pass sequence of decoded sentences.
///
/// Created by [`Decoder::decode_stream`], [`Decoder::decode_reader`] and
/// [`Decoder::decode_file`]. Each call to `next` pulls lines from the source
/// until one decodes, is exhausted, or fails fatally.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug)]
pub struct Sentences<'a, I> {
    decoder: &'a Decoder,
    lines: I,
    done: bool,
}

impl<I> Iterator for Sentences<'_, I>
where
    I: Iterator,
    I::Item: RawLine,
{
    type Item = Result<NmeaSentence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            let item = match line.into_text() {
                Ok(text) => self.decoder.step(text.as_ref()),
                Err(e) => Some(Err(e)),
            };

            if let Some(item) = item {
                self.done = item.is_err();
                return Some(item);
            }
        }

        self.done = true;
        None
    }
}

impl<I> FusedIterator for Sentences<'_, I>
where
    I: Iterator,
    I::Item: RawLine,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_type_from_str() {
        assert_eq!("$GPGGA".parse::<SentenceType>().unwrap(), SentenceType::GGA);
        assert_eq!("GPRMC".parse::<SentenceType>().unwrap(), SentenceType::RMC);
        assert_eq!("$GPGSV".parse::<SentenceType>().unwrap(), SentenceType::GSV);

        for tag in ["$GPZDA", "GGA", "$GNGGA", "", "$"] {
            assert!(
                matches!(tag.parse::<SentenceType>(), Err(Error::SentenceNotSupported(_))),
                "Failed: {tag:?}"
            );
        }
    }

    #[test]
    fn test_sentence_type_display() {
        assert_eq!(SentenceType::GGA.to_string(), "$GPGGA");
        assert_eq!(SentenceType::RMC.to_string(), "$GPRMC");
        assert_eq!(SentenceType::GSV.to_string(), "$GPGSV");
    }

    #[test]
    fn test_default_sentences() {
        assert_eq!(Decoder::new().sentences(), SentenceType::ALL);
        assert_eq!(Decoder::default(), Decoder::new());
    }

    #[test]
    fn test_unsupported_sentence() {
        let result = Decoder::with_sentences(["$GPGGA", "$GPGLL"]);
        match result {
            Err(Error::SentenceNotSupported(tag)) => assert_eq!(tag, "$GPGLL"),
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_sentences() {
        let decoder = Decoder::with_sentences(["$GPRMC", "$GPGGA", "$GPRMC"]).unwrap();
        assert_eq!(decoder.sentences(), [SentenceType::RMC, SentenceType::GGA]);
    }

    #[test]
    fn test_empty_selection() {
        let decoder = Decoder::with_sentences(Vec::<String>::new()).unwrap();
        assert!(decoder.sentences().is_empty());

        let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
        assert!(decoder.decode_one(line).unwrap().is_none());
    }
}
