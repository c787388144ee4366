//! Cayley CLI 工具
//!
//! 交互式查询命令行界面

use cayley_client::{Client, Language};
use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "cayley-cli")]
#[command(about = "Cayley 图数据库查询命令行工具")]
struct Args {
    /// 服务地址
    #[arg(short, long, default_value = cayley_client::DEFAULT_URL)]
    url: String,

    /// 查询语言 (gizmo, graphql, mql)
    #[arg(short, long, default_value = "gizmo")]
    lang: String,

    /// 单次查询的结果上限
    #[arg(long, default_value = "100")]
    limit: i64,

    /// 执行单个查询后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut language = parse_language(&args.lang)?;

    println!("Cayley CLI - Cayley 图数据库客户端");
    println!("==================================");

    let client = Client::new(&args.url)?;
    println!("服务地址: {}", client.url());

    // 单个查询模式
    if let Some(query) = args.execute {
        run_query(&client, &query, language, args.limit).await?;
        return Ok(());
    }

    // 交互模式
    println!("\n输入 Gizmo 查询语句，'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("cayley> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).copied().unwrap_or("");

        match cmd.as_str() {
            "quit" | "exit" | "q" => break,

            "help" | "h" | "?" => print_help(),

            "lang" => {
                if rest.is_empty() {
                    println!("当前查询语言: {}", language.as_str());
                } else {
                    match parse_language(rest) {
                        Ok(lang) => {
                            language = lang;
                            println!("查询语言切换为: {}", language.as_str());
                        }
                        Err(e) => println!("错误: {}", e),
                    }
                }
            }

            // 其余输入作为查询文本发送
            _ => {
                if let Err(e) = run_query(&client, line, language, args.limit).await {
                    println!("错误: {}", e);
                }
            }
        }
    }

    println!("再见！");
    Ok(())
}

fn parse_language(s: &str) -> Result<Language, String> {
    match s.to_lowercase().as_str() {
        "gizmo" => Ok(Language::Gizmo),
        "graphql" => Ok(Language::GraphQl),
        "mql" => Ok(Language::Mql),
        other => Err(format!("不支持的查询语言: {}", other)),
    }
}

async fn run_query(
    client: &Client,
    query: &str,
    language: Language,
    limit: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = client.query(query, language, limit).await?;

    if let Some(error) = response.error {
        println!("远程错误: {}", error);
        return Ok(());
    }

    let result = response.result.unwrap_or_default();
    for value in &result {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    println!("\n{} 条结果", result.len());

    Ok(())
}

fn print_help() {
    println!(
        "
═══════════════════════════════════════════════════════════════
                     Cayley CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?           显示帮助
  quit, exit, q        退出程序
  lang [语言]          查看或切换查询语言 (gizmo, graphql, mql)

其余输入将作为查询文本发送到服务端，例如:

Gizmo 查询:
  g.V().all()
  g.V(\"<alice>\").out(\"<follows>\").all()
  g.V().has(\"<status>\", \"cool_person\").all()
  g.V().out(g.IRI(\"follows\")).getLimit(10)

命名空间:
  g.addDefaultNamespaces();graph.Vertex().all()
  g.addNamespace(\"ex\", \"http://example.com/\");graph.Vertex().all()

═══════════════════════════════════════════════════════════════
"
    );
}
