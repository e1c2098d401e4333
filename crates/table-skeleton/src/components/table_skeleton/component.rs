use dioxus::prelude::*;

use crate::columns::Columns;
use crate::size::Size;

/// Shimmering placeholder rows for a table body while real data loads.
///
/// Owns only the `tbody` subtree, so it drops into an existing `table` next
/// to a real header:
///
/// ```rust
/// use dioxus::prelude::*;
/// use dioxus_table_skeleton::TableSkeletonBody;
///
/// #[component]
/// fn LoadingTable() -> Element {
///     rsx! {
///         table {
///             TableSkeletonBody { rows: 8, columns: 4, randomize: true }
///         }
///     }
/// }
/// ```
///
/// Column widths come from `columns` — numbers are pixel widths, strings are
/// used verbatim. With `randomize`, every unset or `auto` column gets a
/// seeded percentage that is identical across renders. The theme props
/// surface as CSS custom properties on the `tbody` for the stylesheet to
/// consume; an explicit `style` string is applied after them and wins on
/// collision.
#[component]
pub fn TableSkeletonBody(
    #[props(default = 5)] rows: usize,
    #[props(into, default = Columns::Count(3))] columns: Columns,
    #[props(into, default = Size::css("48px"))] row_height: Size,
    #[props(into, default = Size::css("8px"))] cell_padding: Size,
    #[props(default = true)] shimmer: bool,
    #[props(default = false)] randomize: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] style: Option<String>,
    #[props(default)] background_color: Option<String>,
    #[props(default)] shimmer_color: Option<String>,
    #[props(default)] bar_height: Option<Size>,
    #[props(default)] bar_border_radius: Option<Size>,
) -> Element {
    let cols = columns.normalize();

    let cell_base =
        format!("padding: {cell_padding}; box-sizing: border-box; vertical-align: middle;");
    let cell_styles: Vec<String> = cols
        .iter()
        .enumerate()
        .map(|(index, col)| match col.resolve(index, randomize) {
            Some(width) => format!("{cell_base} width: {width};"),
            None => cell_base.clone(),
        })
        .collect();
    let row_style = format!("height: {row_height};");

    let body_class = match &class {
        Some(extra) => format!("table-skeleton {extra}"),
        None => String::from("table-skeleton"),
    };

    // Theme variables first, caller style last, so callers win on collision.
    let mut body_style = String::new();
    if let Some(color) = &background_color {
        body_style.push_str(&format!("--skeleton-bg-color: {color}; "));
    }
    if let Some(color) = &shimmer_color {
        body_style.push_str(&format!("--skeleton-shimmer-color: {color}; "));
    }
    if let Some(height) = &bar_height {
        body_style.push_str(&format!("--skeleton-bar-height: {height}; "));
    }
    if let Some(radius) = &bar_border_radius {
        body_style.push_str(&format!("--skeleton-bar-radius: {radius}; "));
    }
    if let Some(extra) = &style {
        body_style.push_str(extra);
    }
    let body_style = body_style.trim_end().to_string();

    let bar_class = if shimmer {
        "skeleton-bar skeleton-shimmer"
    } else {
        "skeleton-bar"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        tbody {
            class: "{body_class}",
            aria_busy: "true",
            style: if !body_style.is_empty() { "{body_style}" },
            for _ in 0..rows {
                tr { style: "{row_style}",
                    for cell_style in cell_styles.iter() {
                        td {
                            role: "cell",
                            aria_hidden: "true",
                            style: "{cell_style}",
                            div { role: "presentation", class: "{bar_class}" }
                        }
                    }
                }
            }
        }
    }
}
