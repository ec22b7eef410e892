use clap::ValueEnum;

/// Language of the fixed wording in generated reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Headers and markers written into a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub banner_title: &'static str,
    pub export_time: &'static str,
    pub export_id: &'static str,
    pub session_messages: &'static str,
    pub context_information: &'static str,
    pub directory_structure: &'static str,
    pub git_status: &'static str,
    pub code_style: &'static str,
    pub truncation_marker: &'static str,
}

pub const EN: Labels = Labels {
    banner_title: "KODE CONTEXT EXPORT",
    export_time: "Export Time",
    export_id: "Export ID",
    session_messages: "Session Messages",
    context_information: "Context Information",
    directory_structure: "Directory Structure",
    git_status: "Git Status",
    code_style: "Code Style",
    truncation_marker: "... (content too long, truncated)",
};

pub const ZH: Labels = Labels {
    banner_title: "KODE CONTEXT EXPORT",
    export_time: "导出时间",
    export_id: "导出ID",
    session_messages: "会话消息",
    context_information: "上下文信息",
    directory_structure: "目录结构",
    git_status: "Git状态",
    code_style: "代码风格",
    truncation_marker: "... (内容过长已截断)",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        EN
    }
}
