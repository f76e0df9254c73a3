//! Genre catalogs for style generation
//!
//! Each style request offers the model a small random sample of genres so
//! repeated runs on the same page do not converge on one sound.

use rand::seq::SliceRandom;
use rand::Rng;

/// Vocal genres offered by the standard prompt
pub const STANDARD_GENRES: &[&str] = &[
    "Pop", "Rock", "Indie Rock", "Alternative Rock", "Punk", "Pop Punk", "Folk", "Indie Folk",
    "Country", "Bluegrass", "Americana", "Blues", "Soul", "Funk", "Motown", "R&B", "Gospel",
    "Hip Hop", "Boom Bap", "Reggae", "Ska", "Disco", "Dance Pop", "Synthpop", "Electropop",
    "New Wave", "Britpop", "Grunge", "Heavy Metal", "Power Metal", "Vocal Jazz", "Swing",
    "Big Band", "Bossa Nova", "Salsa", "Reggaeton", "Afrobeat", "K-pop", "J-pop", "Sea Shanty",
    "Musical Theatre", "Barbershop", "Doo-wop", "Singer-Songwriter",
];

/// Broad catalog offered by the extra creative prompt
pub const EXTENDED_GENRES: &[&str] = &[
    // Classical
    "Baroque", "Classical", "Romantic", "Modern Classical", "Opera", "Chamber Music", "Symphony",
    "Concerto",
    // Avant-garde
    "Avant-garde", "Experimental", "Noise", "Ambient", "Drone", "Minimalism",
    // Blues
    "Blues", "Delta Blues", "Chicago Blues", "Electric Blues", "Blues Rock", "Rhythm and Blues",
    // Country
    "Country", "Country Rock", "Bluegrass", "Honky-tonk", "Outlaw Country", "Country Pop",
    "Alt-Country", "Country Folk",
    // Easy listening
    "Easy Listening", "Lounge", "Smooth Jazz", "Adult Contemporary", "Soft Rock",
    // Electronic
    "Electronic", "House", "Techno", "Trance", "IDM", "Dubstep", "Drum and Bass", "Breakbeat",
    "Electro", "Synthwave", "Vaporwave", "Chillwave", "Future Bass", "Trap", "Lo-fi Hip Hop",
    // Folk
    "Folk", "Folk Rock", "Indie Folk", "Singer-Songwriter", "Acoustic Folk", "Celtic Folk",
    "Americana", "Roots Music",
    // Hip hop
    "Hip Hop", "Rap", "Drill", "Boom Bap", "Alternative Hip Hop", "Conscious Rap", "Gangsta Rap",
    "Mumble Rap",
    // Jazz
    "Jazz", "Bebop", "Swing", "Big Band", "Cool Jazz", "Hard Bop", "Free Jazz", "Fusion",
    "Vocal Jazz", "Jazz Blues",
    // Pop
    "Pop", "Pop Rock", "Power Pop", "Bubblegum Pop", "Teen Pop", "Dance Pop", "Electropop",
    "Synthpop", "Indie Pop", "Art Pop", "Baroque Pop",
    // R&B & Soul
    "R&B", "Soul", "Motown", "Funk", "Disco", "Contemporary R&B", "Neo-Soul", "Gospel",
    "Spirituals",
    // Rock
    "Rock", "Rock and Roll", "Classic Rock", "Hard Rock", "Progressive Rock", "Psychedelic Rock",
    "Art Rock", "Alternative Rock", "Indie Rock", "Grunge", "Britpop", "Post-Rock", "Math Rock",
    "Shoegaze", "Dream Pop",
    // Metal
    "Heavy Metal", "Thrash Metal", "Death Metal", "Black Metal", "Power Metal",
    "Progressive Metal", "Nu Metal", "Metalcore", "Deathcore",
    // Punk
    "Punk", "Hardcore Punk", "Post-Punk", "New Wave", "Post-Hardcore", "Emo", "Pop Punk",
    "Ska Punk", "Crust Punk",
    // African
    "Afrobeat", "Highlife", "Mbalax", "Soukous", "Kwaito", "Afro-pop", "Afro-jazz",
    // Asian
    "J-pop", "K-pop", "C-pop", "Bollywood", "Enka", "Kayokyoku", "Mandopop", "Cantopop",
    // European
    "Europop", "Eurodance", "Italo Disco", "French Pop", "Schlager", "Fado", "Flamenco", "Celtic",
    // Latin American
    "Salsa", "Merengue", "Bachata", "Reggaeton", "Cumbia", "Bossa Nova", "Samba", "Tango",
    "Mariachi", "Latin Pop", "Latin Rock",
    // North American
    "Cajun", "Zydeco", "Tejano", "Native American Music",
    // Religious
    "Christian Rock", "Christian Pop", "Contemporary Christian", "Sacred Music", "Chant", "Hymns",
    // Traditional folk
    "Traditional Folk", "World Music", "Ethnic Music", "Indigenous Music", "Folk Revival",
    "Protest Songs",
    // Other
    "New Age", "Worldbeat", "Crossover", "Experimental Rock", "Prog Rock", "Space Rock",
    "Krautrock", "Canterbury Scene",
];

/// Draw `count` distinct genres from `catalog` in random order
///
/// The random source is explicit so callers can seed it. Asking for more
/// genres than the catalog holds returns the whole catalog, shuffled.
pub fn pick_genres<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &[&'static str],
    count: usize,
) -> Vec<&'static str> {
    let mut shuffled = catalog.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
