// src/scrape/client.rs
//! Network-facing entry points. Each call is a blocking fetch followed by a `specs` parse;
//! any failure aborts the whole call and nothing partial is returned.

use url::Url;

use crate::config::ClientOptions;
use crate::core::Fetcher;
use crate::error::{Error, Result};
use crate::model::{Room, RoomDirectory};
use crate::progress::Progress;
use crate::specs::{directory_page, room_page, status_page};

#[derive(Clone, Debug)]
pub struct LaundryClient {
    fetcher: Fetcher,
    opts: ClientOptions,
}

impl LaundryClient {
    pub fn new(opts: ClientOptions) -> Result<Self> {
        Ok(Self { fetcher: Fetcher::new(&opts)?, opts })
    }

    /// Fetch the status page for `identifier` and build the room.
    pub fn room(&self, identifier: &str) -> Result<Room> {
        let url = self.opts.endpoints.status_url(identifier)?;
        let body = self.fetcher.get_text(&url)?;
        let room = status_page::parse_room(identifier, &body)?;
        logf!("{}", room);
        Ok(room)
    }

    /// Room name → room page URL from the configured housing page.
    pub fn room_to_url_map(&self) -> Result<RoomDirectory<String>> {
        self.room_to_url_map_at(&self.opts.endpoints.housing_page)
    }

    /// Room name → room page URL from the listing at `url`.
    pub fn room_to_url_map_at(&self, url: &str) -> Result<RoomDirectory<String>> {
        let url = Url::parse(url)?;
        let body = self.fetcher.get_text(&url)?;
        let links = directory_page::parse_room_links(&url, &body)?;
        logf!("Found {} laundry rooms at {}", links.len(), url);
        Ok(links)
    }

    /// Identifier embedded in one room page.
    pub fn identifier_from_room_page(&self, url: &str) -> Result<String> {
        let body = self.fetcher.get_text(&Url::parse(url)?)?;
        room_page::parse_identifier(&body)
    }

    /// Room name → identifier. Without `links`, the housing page is fetched first.
    pub fn room_to_identifier_map(
        &self,
        links: Option<&RoomDirectory<String>>,
    ) -> Result<RoomDirectory<String>> {
        self.room_to_identifier_map_with(links, None)
    }

    pub fn room_to_identifier_map_with(
        &self,
        links: Option<&RoomDirectory<String>>,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<RoomDirectory<String>> {
        let fetched;
        let links = match links {
            Some(l) => l,
            None => {
                if let Some(p) = progress.as_deref_mut() {
                    p.log("Reading housing directory…");
                }
                fetched = self.room_to_url_map()?;
                &fetched
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.begin(links.len());
        }

        let result = links
            .iter()
            .map(|(room, url)| {
                let id = self.identifier_from_room_page(url)?;
                logd!("{} -> {}", room, id);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(room);
                }
                Ok::<_, Error>((room, id))
            })
            .collect::<Result<RoomDirectory<String>>>();

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        result
    }
}
