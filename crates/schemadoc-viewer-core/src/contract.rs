//! The markup contract with the documentation generator.
//!
//! The generator emits static pages; these ids, classes, and data
//! attributes are what the interaction layer binds to. None of it is
//! configurable at runtime, the pages and the bundle ship together.

/// Id of the button that flips the text/visual mode.
pub const MODE_BUTTON_ID: &str = "mode-button";

/// Id of the navigation container holding the per-schema lists.
pub const SCHEMA_LIST_ID: &str = "schema-list";

/// Per-schema list ids are this prefix plus the schema name.
pub const SCHEMA_SECTION_ID_PREFIX: &str = "list-";

/// Class of anchors opening table pages. Anchors matched by
/// [`NAV_LINK_SELECTOR`] without this class open function pages.
pub const TABLE_LINK_CLASS: &str = "table-link";

/// Selector matching every collapsible section list in the menu.
pub const SECTION_LIST_SELECTOR: &str = ".function-list, .table-list";
/// Selector matching every navigation anchor.
pub const NAV_LINK_SELECTOR: &str = ".function-link, .table-link";
/// Selector matching function links only (mode-dependent targets).
pub const FUNCTION_LINK_SELECTOR: &str = ".function-link";

/// Attribute holding the function identifier links are rebuilt from.
pub const DATA_FUNCTION_ATTR: &str = "data-function";

/// Selector matching elements that show a column tooltip on hover.
pub const TABLE_TOOLTIP_SELECTOR: &str = ".table-tooltip";
/// Attribute holding the JSON array of column names.
pub const DATA_COLUMNS_ATTR: &str = "data-columns";
/// Attribute holding the JSON array of column types.
pub const DATA_TYPES_ATTR: &str = "data-types";
/// Class of the single shared tooltip element.
pub const TOOLTIP_BOX_CLASS: &str = "tooltip-box";

/// Id of the element catching zoom clicks on diagram pages.
pub const ZOOM_CONTAINER_ID: &str = "zoom-container";
/// Id of the element the scale transform is applied to.
pub const ZOOM_CONTENT_ID: &str = "zoom-content";
