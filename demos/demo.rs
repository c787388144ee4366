//! Cayley Client 演示脚本
//!
//! 构建查询并尝试在本地 Cayley 服务上执行

use cayley_client::query::regex;
use cayley_client::{Client, Graph};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Cayley Client 演示");
    println!("==================\n");

    let g = Graph::new();

    // 构建一些查询
    println!("1. 编译 Gizmo 查询...\n");

    let all = g.v::<&str, _>([]).all();
    println!("全部顶点: {}", all.to_query()?);

    let follows = g
        .v(["<alice>"])
        .out(g.iri("follows"), &[])
        .has("<status>", "cool_person")
        .all();
    println!("关注查询: {}", follows.to_query()?);

    // 可复用的 Morphism 模板
    let friend_of_friend = g.m().out("<follows>", &[]).out("<follows>", &[]);
    let query = g.v(["<charlie>"]).follow(&friend_of_friend).unique().all();
    println!("二度关注: {}", query.to_query()?);

    // 过滤器
    let filtered = g.v::<&str, _>([]).filter(regex("ali.*", Some(true))).all();
    println!("正则过滤: {}", filtered.to_query()?);

    // 执行查询（需要本地 Cayley 服务）
    println!("\n2. 在 {} 上执行...\n", cayley_client::DEFAULT_URL);

    let client = Client::new(cayley_client::DEFAULT_URL)?;
    match client.execute(&g.v::<&str, _>([]).get_limit(5)).await {
        Ok(result) => {
            println!("结果: {} 条", result.len());
            for value in result {
                println!("  {}", value);
            }
        }
        Err(e) => println!("执行失败（服务未启动？）: {}", e),
    }

    Ok(())
}
