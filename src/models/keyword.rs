/// 歧义类型枚举
///
/// 题面标注使用的固定分类集合，每个分类带有展示名称和定义说明。
/// 序列化时使用中文展示名称，与浏览器端导出的记录保持一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AmbiguityKeyword {
    /// 术语与关键概念
    #[serde(rename = "术语与关键概念")]
    TermsAndConcepts,
    /// 目标/功能与副作用
    #[serde(rename = "目标/功能与副作用")]
    GoalsAndSideEffects,
    /// 输入域与非法输入处理
    #[serde(rename = "输入域与非法输入处理")]
    InputDomain,
    /// 输出判定与格式
    #[serde(rename = "输出判定与格式")]
    OutputFormat,
    /// 边界条件/极端情形
    #[serde(rename = "边界条件/极端情形")]
    BoundaryConditions,
    /// 索引与区间语义
    #[serde(rename = "索引与区间语义")]
    IndexSemantics,
    /// 排序/比较/并列与稳定性
    #[serde(rename = "排序/比较/并列与稳定性")]
    OrderingStability,
    /// 字符串与本地化
    #[serde(rename = "字符串与本地化")]
    StringsAndLocalization,
    /// 时间/日期/时区/DST
    #[serde(rename = "时间/日期/时区/DST")]
    TimeAndTimezone,
    /// 单位/量纲与前缀
    #[serde(rename = "单位/量纲与前缀")]
    UnitsAndPrefixes,
    /// 数值精度/误差与舍入
    #[serde(rename = "数值精度/误差与舍入")]
    NumericPrecision,
    /// 随机性与复现
    #[serde(rename = "随机性与复现")]
    Randomness,
    /// 数据结构语义
    #[serde(rename = "数据结构语义")]
    DataStructureSemantics,
    /// 并发/时序/原子性
    #[serde(rename = "并发/时序/原子性")]
    ConcurrencyOrdering,
    /// 规模/性能与资源约束
    #[serde(rename = "规模/性能与资源约束")]
    ScaleAndPerformance,
}

impl AmbiguityKeyword {
    /// 获取全部分类（复选框与解释页面的展示顺序）
    pub fn all() -> &'static [AmbiguityKeyword] {
        use AmbiguityKeyword::*;
        &[
            TermsAndConcepts,
            GoalsAndSideEffects,
            InputDomain,
            OutputFormat,
            BoundaryConditions,
            IndexSemantics,
            OrderingStability,
            StringsAndLocalization,
            TimeAndTimezone,
            UnitsAndPrefixes,
            NumericPrecision,
            Randomness,
            DataStructureSemantics,
            ConcurrencyOrdering,
            ScaleAndPerformance,
        ]
    }

    /// 获取展示名称
    pub fn name(self) -> &'static str {
        match self {
            AmbiguityKeyword::TermsAndConcepts => "术语与关键概念",
            AmbiguityKeyword::GoalsAndSideEffects => "目标/功能与副作用",
            AmbiguityKeyword::InputDomain => "输入域与非法输入处理",
            AmbiguityKeyword::OutputFormat => "输出判定与格式",
            AmbiguityKeyword::BoundaryConditions => "边界条件/极端情形",
            AmbiguityKeyword::IndexSemantics => "索引与区间语义",
            AmbiguityKeyword::OrderingStability => "排序/比较/并列与稳定性",
            AmbiguityKeyword::StringsAndLocalization => "字符串与本地化",
            AmbiguityKeyword::TimeAndTimezone => "时间/日期/时区/DST",
            AmbiguityKeyword::UnitsAndPrefixes => "单位/量纲与前缀",
            AmbiguityKeyword::NumericPrecision => "数值精度/误差与舍入",
            AmbiguityKeyword::Randomness => "随机性与复现",
            AmbiguityKeyword::DataStructureSemantics => "数据结构语义",
            AmbiguityKeyword::ConcurrencyOrdering => "并发/时序/原子性",
            AmbiguityKeyword::ScaleAndPerformance => "规模/性能与资源约束",
        }
    }

    /// 获取定义说明（用于解释页面）
    pub fn description(self) -> &'static str {
        match self {
            AmbiguityKeyword::TermsAndConcepts => {
                "未定义或多义的名词、动词、状态（如“会话”“任务完成”）。常问：术语是否有唯一定义？与域内标准一致吗？"
            }
            AmbiguityKeyword::GoalsAndSideEffects => "函数是否纯？是否修改输入/全局状态/文件系统？",
            AmbiguityKeyword::InputDomain => {
                "取值范围、空输入、越界、无效格式如何处理；是否“输入保证合法”。"
            }
            AmbiguityKeyword::OutputFormat => {
                "唯一答案还是“任一可行解”；空格/大小写/换行/小数位数等格式契约。"
            }
            AmbiguityKeyword::BoundaryConditions => {
                "= / > / ≥ / 闭开区间、空集合、单元素、全相等、最大/最小规模等。"
            }
            AmbiguityKeyword::IndexSemantics => "0/1 基、是否含端点、切片半开/闭区间。",
            AmbiguityKeyword::OrderingStability => {
                "字典序 vs 数值序、是否稳定、并列如何打破（次关键字）。"
            }
            AmbiguityKeyword::StringsAndLocalization => {
                "大小写折叠、Unicode 归一化（UAX#15）、排序/比较（UTS#10/UCA）、空白与标点、全半角。"
            }
            AmbiguityKeyword::TimeAndTimezone => {
                "输入/输出格式、时区、夏令时、区间闭开；建议以 RFC 3339（ISO 8601 profile） 明确化。"
            }
            AmbiguityKeyword::UnitsAndPrefixes => {
                "ms vs s，MB vs MiB（IEC/ NIST 定义），角度 vs 弧度。"
            }
            AmbiguityKeyword::NumericPrecision => {
                "浮点比较是否给容差（eps）、舍入方式，或改为有理数/整数化；对齐 IEEE-754 语义。"
            }
            AmbiguityKeyword::Randomness => {
                "是否固定随机种子、输出是否允许任意解或需“字典序最小”等可复验准则。"
            }
            AmbiguityKeyword::DataStructureSemantics => {
                "集合/多重集/序列是否去重；图是否有向、允许自环/重边、是否连通。"
            }
            AmbiguityKeyword::ConcurrencyOrdering => {
                "“同时发生”还是“按顺序处理”；先收礼后送礼这类单步内顺序。"
            }
            AmbiguityKeyword::ScaleAndPerformance => {
                "N、M 上界，时间/空间复杂度、内存与 I/O 限制；避免只写“较大/尽可能快”这类不可验证表述。"
            }
        }
    }

    /// 尝试从展示名称解析分类
    pub fn from_name(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kw| kw.name() == s)
    }
}
