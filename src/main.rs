// Inspection CLI for the pressfeed content core.
//
// Reads credentials from the environment, runs one content operation,
// and prints the normalized result as JSON. Useful for verifying an
// integration token and source ids before wiring up a frontend.
//
// Usage:
//   pressfeed posts              list blog posts (metadata only)
//   pressfeed post <slug>        one blog post with rendered content
//   pressfeed news               list news articles (metadata only)
//   pressfeed article <slug>     one news article with rendered content

use anyhow::{Context, Result, bail};
use pressfeed::{ContentConfig, ContentService, render_blocks};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let api_token = std::env::var("NOTION_API_KEY").context("NOTION_API_KEY is not configured")?;

    let mut builder = ContentConfig::builder().api_token(api_token);
    if let Ok(page_id) = std::env::var("NOTION_BLOG_PAGE_ID") {
        builder = builder.blog_page_id(page_id);
    }
    if let Ok(database_id) = std::env::var("NOTION_DATABASE_ID") {
        builder = builder.news_database_id(database_id);
    }
    let config = builder.build()?;
    let service = ContentService::new(config)?;

    match args.as_slice() {
        [command] if command == "posts" => {
            let posts = service.get_posts().await?;
            println!("{}", serde_json::to_string_pretty(&posts)?);
        }
        [command, slug] if command == "post" => {
            let post = service.get_post(slug).await?;
            print_with_rendered(&post)?;
        }
        [command] if command == "news" => {
            let articles = service.get_news_list().await?;
            println!("{}", serde_json::to_string_pretty(&articles)?);
        }
        [command, slug] if command == "article" => {
            let article = service.get_news_article(slug).await?;
            print_with_rendered(&article)?;
        }
        _ => {
            bail!("usage: pressfeed <posts | post <slug> | news | article <slug>>");
        }
    }

    Ok(())
}

fn print_with_rendered(article: &pressfeed::Article) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(article)?);
    if let Some(blocks) = &article.content {
        let nodes = render_blocks(blocks, &article.title);
        println!("{}", serde_json::to_string_pretty(&nodes)?);
    }
    Ok(())
}
