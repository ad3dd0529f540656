//! Sample library contents
//!
//! Five authors and ten books, loaded through the regular catalog
//! operations so every reference goes through the same checks as client
//! requests.

use std::collections::HashMap;

use crate::model::{Author, Book};
use crate::storage::Store;

use super::errors::CatalogResult;
use super::Catalog;

const AUTHORS: [&str; 5] = [
    "Margaret Atwood",
    "Neil Gaiman",
    "Terry Pratchett",
    "Arthur C. Clarke",
    "Stephen Baxter",
];

struct SampleBook {
    title: &'static str,
    description: &'static str,
    isbn: &'static str,
    nb_of_page: i32,
    authors: &'static [&'static str],
}

const BOOKS: [SampleBook; 10] = [
    SampleBook {
        title: "Oryx and Crake",
        description: "The novel focuses on a post-apocalyptic character named Snowman, living near a group of primitive human-like creatures whom he calls Crakers.",
        isbn: "0-7710-0868-6",
        nb_of_page: 411,
        authors: &["Margaret Atwood"],
    },
    SampleBook {
        title: "Good Omens",
        description: "It is the coming of the End Times: the Apocalypse is near, and Final Judgement will soon descend upon the human species. This comes as a bit of bad news to the angel Aziraphale and the demon Crowley, who have become used to living their cozy, comfortable lives and have, in a perverse way, taken a liking to humanity.",
        isbn: "0-575-04800-X",
        nb_of_page: 288,
        authors: &["Neil Gaiman", "Terry Pratchett"],
    },
    SampleBook {
        title: "Guards! Guards!",
        description: "The story follows a plot by a secret brotherhood, the Unique and Supreme Lodge of the Elucidated Brethren of the Ebon Night, to overthrow the Patrician of Ankh-Morpork and install a puppet king. Using a stolen magic book, they summon a dragon to strike fear into the people of Ankh-Morpork.",
        isbn: "0-575-04606-6",
        nb_of_page: 288,
        authors: &["Terry Pratchett"],
    },
    SampleBook {
        title: "Time's Eye",
        description: "The story opens with two hominids, probably Homo erectus, known as 'Seeker', a mother, and her infant daughter 'Grasper'. As they walked on the tranquil Earth two million years ago, they were suddenly captured by some blood-red beings, who turn out to be nineteenth-century British redcoat soldiers.",
        isbn: "0-00-713846-6",
        nb_of_page: 392,
        authors: &["Arthur C. Clarke", "Stephen Baxter"],
    },
    SampleBook {
        title: "2001: A Space Odyssey",
        description: "In the background to the story in the book, an ancient and unseen alien race uses a device with the appearance of a large crystalline monolith to investigate worlds all across the galaxy and, if possible, to encourage the development of intelligent life.",
        isbn: "0-453-00269-2",
        nb_of_page: 221,
        authors: &["Arthur C. Clarke"],
    },
    SampleBook {
        title: "Rendezvous with Rama",
        description: "After a meteorite falls in Northeast Italy in 2077, creating a major disaster, the government of Earth sets up the Spaceguard system as an early warning of arrivals from deep space.",
        isbn: "0-575-01587-X",
        nb_of_page: 256,
        authors: &["Arthur C. Clarke"],
    },
    SampleBook {
        title: "Neverwhere",
        description: "Neverwhere is the story of Richard Mayhew and his trials and tribulations in London. At the start of the story, he is a young businessman, recently moved from Scotland and with a normal life ahead. This breaks, however, when he stops to help a mysterious young girl who appears before him, bleeding and weakened, as he walks with his fiancée to dinner to meet her influential boss.",
        isbn: "0-7472-6668-9",
        nb_of_page: 387,
        authors: &["Neil Gaiman"],
    },
    SampleBook {
        title: "American Gods",
        description: "The central premise of the novel is that gods and mythological creatures exist because people believe in them. Immigrants to the United States brought with them spirits and gods. However, the power of these mythological beings has diminished as people's beliefs wane. New gods have arisen, reflecting America's obsessions with media, celebrity, technology, and drugs, among others.",
        isbn: "0-380-97365-0",
        nb_of_page: 465,
        authors: &["Neil Gaiman"],
    },
    SampleBook {
        title: "Coraline",
        description: "Coraline Jones and her parents move into an old house that has been divided into flats. The other tenants include Miss Spink and Miss Forcible, two elderly women retired from the stage, and Mr. Bobinsky, who claims to be training a mouse circus. The flat beside Coraline's is unoccupied.",
        isbn: "0-06-113937-8",
        nb_of_page: 163,
        authors: &["Neil Gaiman"],
    },
    SampleBook {
        title: "Anansi Boys",
        description: "Anansi Boys is the story of Charles \"Fat Charlie\" Nancy, a timid Londoner devoid of ambition, whose unenthusiastic wedding preparations are disrupted when he learns of his father's death in Florida.",
        isbn: "0-06-051518-X",
        nb_of_page: 400,
        authors: &["Neil Gaiman"],
    },
];

/// Counts of what [`load`] inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedCounts {
    pub authors: usize,
    pub books: usize,
}

/// Insert the sample authors and books
pub fn load<S: Store>(catalog: &Catalog<S>) -> CatalogResult<LoadedCounts> {
    let mut ids = HashMap::new();
    for name in AUTHORS {
        let id = catalog.create_author(Author::new(name))?;
        ids.insert(name, id);
    }

    for sample in &BOOKS {
        let mut book = Book::new(
            sample.title,
            sample.description,
            sample.isbn,
            sample.nb_of_page,
        );
        for name in sample.authors {
            book.authors.push(Author::with_id(ids[name], *name));
        }
        catalog.create_book(book)?;
    }

    Ok(LoadedCounts {
        authors: AUTHORS.len(),
        books: BOOKS.len(),
    })
}
