use baidu_search::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// 百度搜索工具: search Baidu and print the results as text or JSON
#[derive(Parser, Debug)]
#[command(
    name = "baidu-search",
    version,
    after_help = "示例:\n    baidu-search \"横店 儿童演员 招募\"\n    baidu-search \"关键词\" --num 20 --output json\n    baidu-search \"关键词\" --debug 1"
)]
pub struct Args {
    /// 搜索关键词
    pub query: String,

    /// 结果数量 (默认10)
    #[arg(short, long)]
    pub num: Option<u32>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// 调试模式 (0或1)
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub debug: u8,

    /// Path to a settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print an empty JSON document instead of the "no results" notice
    #[arg(long)]
    pub empty_json: bool,
}
