//! DrawingML adapter.
//!
//! This module reads the parts of a presentation that feed the resolvers:
//! a shape's `p:spPr`/`p:style`, the theme's `a:clrScheme` and a master's
//! `p:clrMap`. Package extraction and slide assembly stay with the caller,
//! which hands over raw XML fragments or already-built [`XmlNode`] trees.
//!
//! # Example: Resolving a shape from its XML
//!
//! ```rust
//! use shapepaint::batch::resolve_shape;
//! use shapepaint::config::ResolverOptions;
//! use shapepaint::ooxml::{XmlNode, drawingml::shape_request_from_sp};
//! use shapepaint::theme::ThemePalette;
//!
//! let palette = ThemePalette::from_entries([("accent1", "4472C4")]);
//! let sp = XmlNode::parse(br#"<p:sp xmlns:a="a" xmlns:p="p"><p:spPr>
//!     <a:xfrm><a:ext cx="952500" cy="476250"/></a:xfrm>
//!     <a:prstGeom prst="rect"/>
//!     <a:solidFill><a:schemeClr val="accent1"><a:alpha val="50000"/></a:schemeClr></a:solidFill>
//! </p:spPr></p:sp>"#)?;
//!
//! let out = resolve_shape(&shape_request_from_sp(&sp), Some(&palette), &ResolverOptions::default())?;
//! assert_eq!(out.path, "M 0 0 L 100 0 L 100 50 L 0 50 Z");
//! assert_eq!(out.fill.unwrap().to_string(), "rgba(68,114,196,0.5)");
//! # Ok::<(), shapepaint::common::Error>(())
//! ```

pub mod drawingml;
pub mod node;
pub mod theme;

pub use node::XmlNode;
