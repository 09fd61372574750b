use console::Style;
use stylelens_core::analysis::{AnalysisResult, ColorCompatibility};

const RATING_BAR_WIDTH: usize = 20;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    accent: Style,
    dim: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            accent: Style::new().green(),
            dim: Style::new().dim(),
        }
    }
}

pub fn print_analysis_summary(result: &AnalysisResult) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("StyleLens Analysis"));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();

    // Rating as a fraction and a proportional bar
    println!(
        "  {:<14}{}",
        s.label.apply_to("Rating"),
        s.value.apply_to(format!("{:.1}/10", result.rating))
    );
    let filled = (result.rating_fraction() * RATING_BAR_WIDTH as f32).round() as usize;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(RATING_BAR_WIDTH - filled);
    println!("  {:<14}{}", "", s.accent.apply_to(bar));
    println!();

    // Outfit palette
    println!("  {}", s.header.apply_to("Color Palette"));
    for color in &result.color_analysis.primary_colors {
        if *color == result.color_analysis.dominant_color {
            println!(
                "    {} {}",
                s.value.apply_to(color),
                s.dim.apply_to("(dominant)")
            );
        } else {
            println!("    {}", s.value.apply_to(color));
        }
    }
    println!();

    // Skin tone
    println!(
        "  {:<14}{} {}",
        s.label.apply_to("Skin Tone"),
        s.value.apply_to(&result.skin_tone_analysis.tone),
        s.dim.apply_to(&result.skin_tone_analysis.color)
    );
    println!();

    // Suggestions
    if !result.suggestions.is_empty() {
        println!("  {}", s.header.apply_to("Suggestions"));
        for (i, suggestion) in result.suggestions.iter().enumerate() {
            println!(
                "    {}. {}",
                s.label.apply_to(i + 1),
                s.value.apply_to(suggestion)
            );
        }
        println!();
    }

    // Alternatives
    if !result.alternative_colors.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Try Instead"),
            s.value.apply_to(result.alternative_colors.join(", "))
        );
        println!();
    }

    if let Some(ref compat) = result.color_compatibility {
        print_compatibility_section(&s, compat);
    }
}

fn print_compatibility_section(s: &Styles, compat: &ColorCompatibility) {
    println!("  {}", s.header.apply_to("Color Compatibility"));
    if !compat.complementary_colors.is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Pairs With"),
            s.accent.apply_to(compat.complementary_colors.join(", "))
        );
    }
    if !compat.avoid_colors.is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Avoid"),
            s.dim.apply_to(compat.avoid_colors.join(", "))
        );
    }
    println!();
}
