use std::process;

use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use feed_client::{FeedClientError, HttpClient, NewPost, Post, PostPatch};
use feed_store::{ExpandedPost, PostStore, StoreError};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_USER_ID: i64 = 1;

#[derive(Debug, Parser)]
#[command(name = "feed-cli", version, about = "CLI клиент ленты постов")]
struct Cli {
    /// Базовый URL удалённого сервиса постов.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Список постов загруженной ленты.
    List,
    /// Показ поста вместе с комментариями.
    Show {
        #[arg(long)]
        id: i64,
    },
    /// Создание поста.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long, default_value_t = DEFAULT_USER_ID)]
        user_id: i64,
    },
    /// Частичное обновление поста.
    ///
    /// Нужно указать хотя бы одно из `--title` и `--body`.
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging("warn")?;

    let base_url = resolve_base_url(cli.base_url);
    let client = HttpClient::new(base_url);
    let mut store = PostStore::new(client);

    store.initialize().await.map_err(map_store_error)?;

    match cli.command {
        Command::List => print_feed(store.posts()),
        Command::Show { id } => {
            store.expand(id).await.map_err(map_store_error)?;
            let expanded = store
                .expanded()
                .ok_or_else(|| anyhow!("пост id={id} не раскрыт"))?;
            print_expanded(expanded);
        }
        Command::Create { title, body, user_id } => {
            let draft = build_draft(title, body, user_id)?;
            store.create(draft).await.map_err(map_store_error)?;

            let created = store
                .posts()
                .first()
                .ok_or_else(|| anyhow!("лента пуста после создания поста"))?;
            print_post("Пост создан", created);
        }
        Command::Update { id, title, body } => {
            let patch = build_patch(id, title, body)?;
            store.update(patch).await.map_err(map_store_error)?;

            let updated = store
                .posts()
                .iter()
                .find(|post| post.id == id)
                .ok_or_else(|| anyhow!("пост id={id} пропал из ленты после обновления"))?;
            print_post("Пост обновлён", updated);
        }
    }

    Ok(())
}

fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

fn resolve_base_url(base_url: Option<String>) -> String {
    let raw = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    normalize_base_url(raw)
}

fn normalize_base_url(base_url: String) -> String {
    if base_url.starts_with("http://") || base_url.starts_with("https://") {
        return base_url;
    }

    format!("http://{base_url}")
}

fn required_field(name: &str, value: String) -> Result<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        bail!("поле {name} не должно быть пустым");
    }
    Ok(value)
}

fn build_draft(title: String, body: String, user_id: i64) -> Result<NewPost> {
    let title = required_field("title", title)?;
    let body = required_field("body", body)?;
    Ok(NewPost {
        user_id,
        title,
        body,
    })
}

fn build_patch(id: i64, title: Option<String>, body: Option<String>) -> Result<PostPatch> {
    if title.is_none() && body.is_none() {
        bail!("нужно указать хотя бы одно из --title и --body");
    }

    let title = title
        .map(|title| required_field("title", title))
        .transpose()?;
    let body = body.map(|body| required_field("body", body)).transpose()?;
    Ok(PostPatch {
        id,
        title,
        body,
        user_id: None,
    })
}

fn map_store_error(err: StoreError) -> anyhow::Error {
    let message = match err {
        StoreError::UnknownPost { id } => {
            format!("пост id={id} отсутствует в загруженной ленте")
        }
        StoreError::Remote(FeedClientError::NotFound) => "ресурс не найден на сервисе".to_string(),
        StoreError::Remote(err) => format!("ошибка сервиса: {err}"),
    };
    anyhow!(message)
}

fn print_feed(posts: &[Post]) {
    println!("Постов в ленте: {}", posts.len());
    for post in posts {
        println!("- [{}] {} (user_id={})", post.id, post.title, post.user_id);
    }
}

fn print_post(title: &str, post: &Post) {
    println!("{title}");
    println!("id: {}", post.id);
    println!("user_id: {}", post.user_id);
    println!("title: {}", post.title);
    println!("body: {}", post.body);
}

fn print_expanded(expanded: &ExpandedPost) {
    print_post("Пост", &expanded.post);
    println!("Комментариев: {}", expanded.comments.len());
    for comment in &expanded.comments {
        println!(
            "- [{}] {} <{}>: {}",
            comment.id, comment.name, comment.email, comment.body
        );
    }
}
