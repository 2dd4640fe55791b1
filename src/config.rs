/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 题目 JSONL 输入文件路径
    pub input_jsonl_path: String,
    /// 静态网站输出目录
    pub output_dir: String,
    /// 浏览器端 localStorage 存储键
    pub storage_key: String,
    /// 下载的标注文件名
    pub download_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_jsonl_path: "problems.jsonl".to_string(),
            output_dir: "./".to_string(),
            storage_key: "annotations".to_string(),
            download_file: "annotations_final.jsonl".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_jsonl_path: std::env::var("INPUT_JSONL_PATH").unwrap_or(default.input_jsonl_path),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            storage_key: std::env::var("STORAGE_KEY").unwrap_or(default.storage_key),
            download_file: std::env::var("DOWNLOAD_FILE").unwrap_or(default.download_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
