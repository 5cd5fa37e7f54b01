use anyhow::{anyhow, bail};
use log::{debug, error, info};

use crate::catalog_client::CatalogClient;
use crate::configuration::Settings;
use crate::content_api::Transport;
use crate::detail_view::DetailView;
use crate::error::CatalogError;
use crate::models::{Cli, Command, ComicSummary};
use crate::navigation::{DetailHandoff, ReadHandoff};
use crate::progress::{ScrollSource, Viewport};
use crate::reading_session::{ReadingSession, SessionState};

pub async fn run(cli: Cli, settings: Settings) -> anyhow::Result<()> {
    info!("Content API: {}", settings.api_base_url);
    let client = CatalogClient::from_settings(&settings);

    match cli.command {
        Command::Search { query } => {
            search_screen(&client, &query).await;
        }
        Command::Browse {
            query,
            pick,
            chapter,
        } => browse(&client, &query, pick, chapter.as_deref()).await?,
        Command::Read {
            slug,
            link,
            chapter,
            title,
        } => {
            let handoff = link.map(|chapter_link| ReadHandoff {
                chapter_link,
                comic_title: title,
                chapter_number: chapter,
            });
            read_screen(&client, &slug, handoff).await?;
        }
    }

    info!("Finished!");
    Ok(())
}

async fn search_screen<T: Transport>(client: &CatalogClient<T>, query: &str) -> Vec<ComicSummary> {
    let results = match client.search(query).await {
        Ok(results) => results,
        Err(CatalogError::InvalidInput(_)) => {
            debug!("Blank query, nothing to search");
            return Vec::new();
        }
        Err(e) => {
            error!("Search failed: {}", e);
            println!("{}", client.messages().search_failed);
            return Vec::new();
        }
    };

    for (i, comic) in results.iter().enumerate() {
        println!(
            "{:>3}. {} [{}] {}",
            i,
            comic.title,
            comic.type_label.as_deref().unwrap_or("-"),
            comic.genre_or_dash()
        );
        println!("     {}", comic.cover_url());
    }
    results
}

async fn browse<T: Transport>(
    client: &CatalogClient<T>,
    query: &str,
    pick: usize,
    chapter: Option<&str>,
) -> anyhow::Result<()> {
    let results = search_screen(client, query).await;
    let Some(comic) = results.into_iter().nth(pick) else {
        bail!("no search result at position {}", pick);
    };

    let view = detail_screen(client, Some(DetailHandoff::from_summary(comic))).await?;
    let next = match chapter {
        Some(number) => view.read_chapter(number),
        None => view.read_first(),
    };
    let (route, handoff) = next.map_err(|e| anyhow!(client.messages().describe(&e)))?;

    info!("Navigating to {}", route);
    read_screen(client, &view.comic.slug, Some(handoff)).await
}

async fn detail_screen<T: Transport>(
    client: &CatalogClient<T>,
    handoff: Option<DetailHandoff>,
) -> anyhow::Result<DetailView> {
    let messages = client.messages();
    let view = DetailView::open(client, handoff)
        .await
        .map_err(|e| anyhow!(messages.describe(&e)))?;

    if let Some(notice) = &view.notice {
        println!("{}: {}", messages.error_heading, notice);
    }
    println!("{}", view.comic.title);
    println!("Chapter: {}", view.comic.chapter_label(messages));
    println!("Synopsis: {}", view.detail.synopsis);
    println!("Creator: {}", view.detail.creator);
    let numbers: Vec<&str> = view
        .detail
        .chapters
        .iter()
        .map(|c| c.chapter_number.as_str())
        .collect();
    println!("Chapters: {}", numbers.join(", "));

    Ok(view)
}

async fn read_screen<T: Transport>(
    client: &CatalogClient<T>,
    slug: &str,
    handoff: Option<ReadHandoff>,
) -> anyhow::Result<()> {
    let messages = client.messages();
    let mut session = ReadingSession::new(handoff);

    let images = match session.load(client).await {
        SessionState::Ready(ready) => {
            if let Some(notice) = &ready.notice {
                println!("{}: {}", messages.error_heading, notice);
            }
            ready.images.clone()
        }
        SessionState::Failed(e) => {
            println!("{}: {}", messages.error_heading, messages.describe(e));
            println!("<- {}", ReadingSession::handle_back(slug));
            bail!(messages.describe(e));
        }
        SessionState::Loading => Vec::new(),
    };

    if let Some(heading) = session.heading() {
        println!("{}", heading);
    }

    // One terminal line per page stands in for the scrolled document.
    let source = ScrollSource::new();
    let mut progress = source.subscribe();
    let page_count = images.len() as f64;
    for (i, page) in images.iter().enumerate() {
        source.scroll_to(Viewport {
            scroll_top: i as f64,
            scroll_height: page_count,
            client_height: 1.0,
        });
        let percent = session
            .follow(&mut progress)
            .await
            .map(|p| p.scroll_percent)
            .unwrap_or_default();
        println!("[{:>3.0}%] {:>3}. {}", percent, i + 1, page);
    }
    println!("{}", messages.end_of_chapter);
    println!("<- {}", ReadingSession::handle_back(slug));

    Ok(())
}
