//! Curated id lists for the home screens.
//!
//! OMDb has no browse or genre endpoint, so the featured and trending rows
//! are fixed lists of well-known IMDb ids. The genre view filters the
//! featured set client-side; that is a known approximation carried over
//! from the product, not something this layer can do better with the
//! provider it has.

/// Featured movies shown on the home page, in display order.
pub const FEATURED_MOVIE_IDS: [&str; 30] = [
    "tt0111161", // The Shawshank Redemption
    "tt0068646", // The Godfather
    "tt0468569", // The Dark Knight
    "tt0071562", // The Godfather Part II
    "tt0050083", // 12 Angry Men
    "tt0108052", // Schindler's List
    "tt0167260", // The Lord of the Rings: The Return of the King
    "tt0110912", // Pulp Fiction
    "tt0120737", // The Lord of the Rings: The Fellowship of the Ring
    "tt0109830", // Forrest Gump
    "tt1375666", // Inception
    "tt0167261", // The Lord of the Rings: The Two Towers
    "tt0080684", // Star Wars: Episode V
    "tt0133093", // The Matrix
    "tt0099685", // Goodfellas
    "tt0073486", // One Flew Over the Cuckoo's Nest
    "tt0114369", // Se7en
    "tt0047478", // Seven Samurai
    "tt0317248", // City of God
    "tt0076759", // Star Wars: Episode IV
    "tt0102926", // The Silence of the Lambs
    "tt0118799", // Life Is Beautiful
    "tt0038650", // It's a Wonderful Life
    "tt0245429", // Spirited Away
    "tt0120815", // Saving Private Ryan
    "tt0816692", // Interstellar
    "tt6751668", // Parasite
    "tt0114814", // The Usual Suspects
    "tt0120689", // The Green Mile
    "tt0120586", // American History X
];

/// How many of the featured ids the home page actually shows.
pub const FEATURED_COUNT: usize = 12;

/// Recent popular movies for the trending row.
pub const TRENDING_MOVIE_IDS: [&str; 10] = [
    "tt15398776", // Oppenheimer
    "tt1517268",  // Barbie
    "tt9362722",  // Spider-Man: Across the Spider-Verse
    "tt6710474",  // Everything Everywhere All at Once
    "tt10872600", // Spider-Man: No Way Home
    "tt1160419",  // Dune
    "tt9114286",  // Black Panther: Wakanda Forever
    "tt8041270",  // Killers of the Flower Moon
    "tt14230458", // Poor Things
    "tt7657566",  // The Holdovers
];
