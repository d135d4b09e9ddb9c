//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from external
//! error types to the unified Error type.

#[cfg(feature = "ooxml")]
use super::types::Error;

#[cfg(feature = "ooxml")]
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(feature = "ooxml")]
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(all(test, feature = "ooxml"))]
mod tests {
    use super::*;

    #[test]
    fn test_quick_xml_error_maps_to_xml_variant() {
        let mut reader = quick_xml::Reader::from_reader(&b"<a></b>"[..]);
        let mut buf = Vec::new();
        let err = loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Eof) => panic!("mismatched tags should fail"),
                Ok(_) => buf.clear(),
                Err(e) => break e,
            }
        };
        assert!(matches!(Error::from(err), Error::Xml(_)));
    }
}
