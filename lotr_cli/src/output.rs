use anyhow::Result;
use lotr_sdk::types::{Movie, Quote};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct MovieRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Runtime")]
    #[serde(rename = "Runtime")]
    runtime: String,
    #[tabled(rename = "Budget")]
    #[serde(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Box Office")]
    #[serde(rename = "Box Office")]
    box_office: String,
    #[tabled(rename = "Oscars")]
    #[serde(rename = "Oscars")]
    oscars: String,
    #[tabled(rename = "RT Score")]
    #[serde(rename = "RT Score")]
    score: f64,
}

#[derive(Tabled, Serialize)]
struct QuoteRow {
    #[tabled(rename = "Dialog")]
    #[serde(rename = "Dialog")]
    dialog: String,
    #[tabled(rename = "Character")]
    #[serde(rename = "Character")]
    character: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
}

// -- Row builders --

fn build_movie_rows(movies: &[Movie]) -> Vec<MovieRow> {
    movies
        .iter()
        .map(|m| MovieRow {
            id: m.id.clone(),
            name: m.name.clone(),
            runtime: format!("{} min", m.runtime_in_minutes),
            budget: format_millions(m.budget_in_millions),
            box_office: format_millions(m.box_office_revenue_in_millions),
            oscars: format!(
                "{}/{}",
                m.academy_award_wins, m.academy_award_nominations
            ),
            score: m.rotten_tomatoes_score,
        })
        .collect()
}

fn build_quote_rows(quotes: &[Quote]) -> Vec<QuoteRow> {
    quotes
        .iter()
        .map(|q| QuoteRow {
            dialog: q.dialog.trim().to_string(),
            character: q.character.clone(),
            id: q.id.clone(),
        })
        .collect()
}

// -- Dispatch --

pub fn print_movies(movies: &[Movie], format: &OutputFormat) -> Result<()> {
    let rows = build_movie_rows(movies);
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Markdown => print_markdown(rows),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(&movies),
    }
    Ok(())
}

pub fn print_quotes(quotes: &[Quote], format: &OutputFormat) -> Result<()> {
    let rows = build_quote_rows(quotes);
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Markdown => print_markdown(rows),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(&quotes),
    }
    Ok(())
}

// -- Renderers --

fn print_table<R: Tabled>(rows: Vec<R>) {
    println!("{}", Table::new(rows));
}

fn print_markdown<R: Tabled>(rows: Vec<R>) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

fn print_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_millions(value: f64) -> String {
    if value >= 1_000.0 {
        format!("${:.2}B", value / 1_000.0)
    } else {
        format!("${}M", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_movies_fixture() -> Vec<Movie> {
        let json_str = include_str!("../../lotr_api/tests/fixtures/movies.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["docs"].clone()).unwrap()
    }

    fn load_quotes_fixture() -> Vec<Quote> {
        let json_str = include_str!("../../lotr_api/tests/fixtures/quotes.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["docs"].clone()).unwrap()
    }

    // -- format_millions tests --

    #[test]
    fn test_format_millions_whole() {
        assert_eq!(format_millions(94.0), "$94M");
    }

    #[test]
    fn test_format_millions_fraction() {
        assert_eq!(format_millions(17.8), "$17.8M");
    }

    #[test]
    fn test_format_millions_billions() {
        assert_eq!(format_millions(2917.0), "$2.92B");
    }

    // -- Row builder tests --

    #[test]
    fn test_build_movie_rows_mapping() {
        let movies = load_movies_fixture();
        let rows = build_movie_rows(&movies);
        assert_eq!(rows.len(), 4);

        let row = &rows[1];
        assert_eq!(row.id, "5cd95395de30eff6ebccde5b");
        assert_eq!(row.name, "The Two Towers");
        assert_eq!(row.runtime, "179 min");
        assert_eq!(row.budget, "$94M");
        assert_eq!(row.box_office, "$926M");
        assert_eq!(row.oscars, "2/6");
        assert_eq!(row.score, 96.0);
    }

    #[test]
    fn test_build_quote_rows_mapping() {
        let quotes = load_quotes_fixture();
        let rows = build_quote_rows(&quotes);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[3].dialog, "Give us that! Deagol my love");
        assert_eq!(rows[0].character, "5cd99d4bde30eff6ebccfe9e");
    }

    #[test]
    fn test_movie_table_has_headers() {
        let table = Table::new(build_movie_rows(&load_movies_fixture())).to_string();
        let header_line = table.lines().nth(1).unwrap();
        assert!(header_line.contains("Name"));
        assert!(header_line.contains("RT Score"));
        assert!(table.contains("The Return of the King"));
    }

    #[test]
    fn test_markdown_empty_produces_headers_only() {
        let rows: Vec<QuoteRow> = build_quote_rows(&[]);
        let mut table = Table::new(&rows);
        table.with(Style::markdown());
        let md = table.to_string();

        let lines: Vec<&str> = md.lines().collect();
        assert!(lines.len() <= 2, "expected at most 2 lines for empty table, got {}", lines.len());
        if !lines.is_empty() {
            assert!(lines[0].contains("Dialog"));
        }
    }

    #[test]
    fn test_csv_row_serializes_with_renamed_headers() {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in build_quote_rows(&load_quotes_fixture()[..1]) {
            wtr.serialize(row).unwrap();
        }
        let out = String::from_utf8(wtr.into_inner().ok().unwrap()).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Dialog,Character,ID"));
        assert_eq!(
            lines.next(),
            Some("Deagol!,5cd99d4bde30eff6ebccfe9e,5cd96e05de30eff6ebcce7e9")
        );
    }
}
