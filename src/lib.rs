pub mod model;
pub mod builtin;
pub mod layout;
pub mod interaction;
pub mod filter;
pub mod connections;
pub mod dataset;
pub mod writer;
pub mod generator;
pub mod theme;

// Export data model
pub use model::{Cast, Character, Connection, TimelinePoint};
pub use builtin::{builtin_cast, builtin_characters};

// Export layout and interaction
pub use layout::{TimelineLayout, TimelineSection, SECTION_GAP_THRESHOLD};
pub use interaction::{PanGesture, Zoom};
pub use filter::{filter_by_name, name_matches};
pub use connections::{resolve_connectors, resolved_connections, Connector};

// Export dataset I/O
pub use dataset::{
    CastReader, JsonCastReader, GeneratedCastReader,
    DatasetError, parse_cast, read_cast_file
};
pub use writer::CastWriter;
pub use generator::{GeneratorConfig, generate_characters};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, parse_hex_color, adjust_brightness, with_alpha, with_opacity};
