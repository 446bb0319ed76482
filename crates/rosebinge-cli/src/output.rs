use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use rosebinge_models::{MovieRecord, RecentSearch, WatchlistEntry};

pub fn success(msg: impl AsRef<str>) {
    println!("{} {}", "✓".green(), msg.as_ref());
}

pub fn notice(msg: impl AsRef<str>) {
    println!("{} {}", "•".yellow(), msg.as_ref());
}

pub fn print_movies(movies: &[MovieRecord]) {
    if movies.is_empty() {
        notice("No movies to show");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Title", "Year", "Rating", "Genre"]);

    for movie in movies {
        let year = if movie.year == 0 {
            "—".to_string()
        } else {
            movie.year.to_string()
        };
        let rating = if movie.rating == 0.0 {
            "—".to_string()
        } else {
            format!("{:.1}", movie.rating)
        };
        table.add_row(vec![
            Cell::new(&movie.id),
            Cell::new(&movie.title),
            Cell::new(year),
            Cell::new(rating),
            Cell::new(&movie.genre),
        ]);
    }
    println!("{table}");
}

pub fn print_movie_detail(movie: &MovieRecord) {
    println!("{} ({})", movie.title.bold(), movie.year);
    println!("  {} {:.1}/10", "Rating:".dimmed(), movie.rating);
    println!("  {} {}", "Genre:".dimmed(), movie.genre);
    println!("  {} {}", "Director:".dimmed(), movie.director);
    if !movie.cast.is_empty() {
        println!("  {} {}", "Cast:".dimmed(), movie.cast.join(", "));
    }
    if let Some(duration) = &movie.duration {
        println!("  {} {}", "Runtime:".dimmed(), duration);
    }
    if let Some(rated) = &movie.rated {
        println!("  {} {}", "Rated:".dimmed(), rated);
    }
    if let Some(awards) = &movie.awards {
        println!("  {} {}", "Awards:".dimmed(), awards);
    }
    println!("  {} {}", "Poster:".dimmed(), movie.poster);
    println!();
    println!("{}", movie.synopsis);
}

pub fn print_watchlist(entries: &[WatchlistEntry]) {
    if entries.is_empty() {
        notice("Watchlist is empty");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Title", "Added"]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.id),
            Cell::new(&entry.title),
            Cell::new(entry.added_at.format("%Y-%m-%d").to_string()),
        ]);
    }
    println!("{table}");
}

pub fn print_recent_searches(searches: &[RecentSearch]) {
    if searches.is_empty() {
        notice("No recent searches");
        return;
    }
    for search in searches {
        println!(
            "{}  {}",
            search.searched_at.format("%Y-%m-%d %H:%M").dimmed(),
            search.query
        );
    }
}
