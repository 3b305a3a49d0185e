use crate::common::*;

use crate::enums::category::*;

#[doc = "Helper function for creating common table rows"]
fn generate_table_rows<T, F>(data: &[T], row_formatter: F) -> String
where
    F: Fn(&T) -> Vec<String>,
{
    data.iter()
        .map(|item| {
            let cells: String = row_formatter(item)
                .iter()
                .map(|cell| format!("<td>{}</td>", encode_text(cell)))
                .collect::<String>();
            format!("<tr>{}</tr>", cells)
        })
        .collect::<String>()
}

#[doc = r#"
    Renders `data` as a striped HTML table.

    # Arguments
    * `headers` - Column titles
    * `data` - Rows to render
    * `row_formatter` - Produces one cell text per header for a row
"#]
pub fn generate_html_table<T, F>(headers: &[&str], data: &[T], row_formatter: F) -> String
where
    F: Fn(&T) -> Vec<String>,
{
    let header_cells: String = headers
        .iter()
        .map(|header| format!("<th>{}</th>", encode_text(header)))
        .collect::<String>();

    format!(
        r#"<table class="table table-striped"><thead><tr>{}</tr></thead><tbody>{}</tbody></table>"#,
        header_cells,
        generate_table_rows(data, row_formatter)
    )
}

#[doc = "`<option>` list of every category, marking `selected` if given"]
pub fn generate_category_options(selected: Option<Category>) -> String {
    Category::ALL
        .iter()
        .map(|category| {
            let selected_attr: &str = if Some(*category) == selected {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                encode_double_quoted_attribute(category.label()),
                selected_attr,
                encode_text(category.label())
            )
        })
        .collect::<String>()
}
