use crate::output::Theme;

/// Print the available report themes
pub fn list_themes() {
    println!("Available themes:");
    for theme in Theme::ALL {
        println!("  {}: {}", theme.name(), theme.description());
    }
}
