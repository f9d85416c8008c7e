pub const COLOR_VARIABLE_PREFIX: &str = "--color-";
pub const FONT_FAMILY_VARIABLE: &str = "--font-family";
pub const LOGO_URL_VARIABLE: &str = "--logo-url";

pub const BRAND_FILE_PREFIX: &str = "org_";
pub const BRAND_FILE_EXTENSION: &str = "json";
