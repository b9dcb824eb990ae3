//! Interactive search over a small album collection.
//!
//! Type to filter, `↑/↓` to move, `enter` to pick an album, `esc` to clear the
//! query and `ctrl+c` to quit. Albums that have not received a vote yet start
//! out hidden and only appear when a query matches them.
//!
//! Logs go to `album-search.log` in the system temp directory; set `RUST_LOG`
//! (for example `RUST_LOG=listsearch=debug`) to see every filter pass.

use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg, Program};
use lipgloss_extras::prelude::*;
use listsearch::search::{Link, ListItem, Visibility};
use listsearch::searchlist::{self, SelectedMsg};

struct Album {
    artist: &'static str,
    title: &'static str,
    votes: u32,
    poll: u32,
}

const ALBUMS: &[Album] = &[
    Album {
        artist: "Radiohead",
        title: "OK Computer",
        votes: 12,
        poll: 1,
    },
    Album {
        artist: "Radiohead",
        title: "Kid A",
        votes: 7,
        poll: 1,
    },
    Album {
        artist: "Portishead",
        title: "Dummy",
        votes: 0,
        poll: 2,
    },
    Album {
        artist: "Massive Attack",
        title: "Mezzanine",
        votes: 4,
        poll: 2,
    },
    Album {
        artist: "Björk",
        title: "Homogenic",
        votes: 3,
        poll: 1,
    },
    Album {
        artist: "Burial",
        title: "Untrue",
        votes: 0,
        poll: 3,
    },
    Album {
        artist: "Boards of Canada",
        title: "Music Has the Right to Children",
        votes: 5,
        poll: 3,
    },
    Album {
        artist: "Aphex Twin",
        title: "Selected Ambient Works 85-92",
        votes: 9,
        poll: 3,
    },
    Album {
        artist: "DJ Shadow",
        title: "Endtroducing.....",
        votes: 0,
        poll: 2,
    },
    Album {
        artist: "Air",
        title: "Moon Safari",
        votes: 2,
        poll: 1,
    },
    Album {
        artist: "Daft Punk",
        title: "Discovery",
        votes: 6,
        poll: 1,
    },
    Album {
        artist: "The Avalanches",
        title: "Since I Left You",
        votes: 1,
        poll: 3,
    },
];

fn album_items() -> Vec<ListItem> {
    ALBUMS
        .iter()
        .map(|album| {
            let visibility = if album.votes > 0 {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
            let link = Link::new(format!("{} - {}", album.artist, album.title))
                .with_href(format!("/polls/{}/", album.poll));
            ListItem::with_links(vec![link], visibility)
        })
        .collect()
}

struct AlbumSearch {
    list: searchlist::Model,
    picked: Option<String>,
}

impl BubbleTeaModel for AlbumSearch {
    fn init() -> (Self, Option<Cmd>) {
        let list = searchlist::Model::new(album_items())
            .with_title("Album search")
            .with_placeholder("artist or title")
            .with_item_names("album", "albums")
            .with_height(8)
            .with_width(60);
        (Self { list, picked: None }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(selected) = msg.downcast_ref::<SelectedMsg>() {
            let item = self.list.items().get(selected.index)?;
            let href = item
                .links()
                .first()
                .and_then(|link| link.href.clone())
                .unwrap_or_default();
            tracing::info!(label = item.label(), %href, "picked album");
            self.picked = Some(format!("{} ({href})", item.label()));
            return None;
        }
        self.list.update(msg)
    }

    fn view(&self) -> String {
        let mut view = self.list.view();
        if let Some(picked) = &self.picked {
            let style = Style::new().foreground(Color::from("212"));
            view.push_str("\n\n");
            view.push_str(&style.render(&format!("Picked: {picked}")));
        }
        view
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let file_appender =
        tracing_appender::rolling::never(std::env::temp_dir(), "album-search.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let program = Program::<AlbumSearch>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
