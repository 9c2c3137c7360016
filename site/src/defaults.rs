// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Texts shown when the content tree does not provide them.

use rwai_models::Localized;

pub type Text = Localized<&'static str>;

const fn text(en: &'static str, zh: &'static str) -> Text {
    Localized { en, zh }
}

/// Title with a short description, used for steps, features, values and FAQ entries.
#[derive(Clone, Copy, Debug)]
pub struct Card {
    pub title: Text,
    pub description: Text,
}

const fn card(title: Text, description: Text) -> Card {
    Card { title, description }
}

#[derive(Clone, Copy, Debug)]
pub struct ExternalLink {
    pub title: &'static str,
    pub href: &'static str,
    pub description: Text,
}

#[derive(Clone, Copy, Debug)]
pub struct CaseStudy {
    pub title: Text,
    pub company: Text,
    pub before: Text,
    pub after: Text,
    pub efficiency: &'static str,
    pub accuracy: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct FaqCategory {
    pub name: Text,
    pub entries: [Card; 3],
}

pub const GITHUB_URL: &str = "https://github.com/THU-ZJAI/Real-World-AI";
pub const CONTACT_EMAIL: &str = "mailto:contact@rwai-arena.org";
pub const CAREERS_EMAIL: &str = "mailto:careers@rwai-arena.org";
pub const EXPERT_EMAIL: &str = "mailto:contactmx@163.com";
pub const DISCORD_URL: &str = "https://discord.gg/rwai";

// Layout

pub const SITE_NAME: &str = "RWAI Arena";
pub const NAV_ARENA: Text = text("Arena", "竞技场");
pub const NAV_ABOUT: Text = text("About", "关于");
pub const NAV_FAQ: Text = text("FAQ", "常见问题");
/// Label of the link switching to the other language.
pub const LANGUAGE_SWITCH: Text = text("中文", "English");
pub const FOOTER_TAGLINE: Text = text(
    "Real-World AI Arena - Finding the best AI practices for real-world scenarios.",
    "真实世界AI竞技场 - 为真实场景寻找最佳AI实践。",
);
pub const FOOTER_PLATFORM: Text = text("Platform", "平台");
pub const FOOTER_COMMUNITY: Text = text("Community", "社区");
pub const FOOTER_ABOUT: Text = text("About Us", "关于我们");
pub const FOOTER_FOLLOW: Text = text("Follow on GitHub", "在GitHub关注");
pub const NOT_FOUND_TITLE: Text = text("Page Not Found", "页面未找到");
pub const NOT_FOUND_TEXT: Text =
    text("The page you are looking for does not exist.", "您访问的页面不存在。");
pub const BACK_HOME: Text = text("Back to Home", "返回首页");

// Home page

pub const HERO_BADGES: Text =
    text("Open Source • Verified • Replicable", "开源 • 已验证 • 可复制");
pub const HERO_TITLE: Text = text("Which AI Actually Works?", "哪个 AI 真的有效？");
pub const HERO_SUBTITLE: Text =
    text("We test them. Recommend only the Best Practice.", "我们测试它们。只推荐最佳实践。");
pub const HERO_DESCRIPTION: Text = text(
    "Test AI practice in real-world scenarios. Verify what works. \
     Locate only the best-proven practice and open-source everything.",
    "在真实场景中测试AI实践。验证什么有效。定位只有最佳验证的实践并开源所有内容。",
);
pub const HERO_PRIMARY_TEXT: Text = text("Find AI Solutions", "查找AI解决方案");
pub const HERO_PRIMARY_LINK: &str = "/arena";
pub const HERO_SECONDARY_TEXT: Text = text("Join as Developer", "加入开发者");
pub const HERO_SECONDARY_LINK: &str = GITHUB_URL;

pub const FEATURED_COUNT: usize = 3;
pub const FEATURED_TITLE: Text = text("Featured AI Best Practices", "精选 AI 最佳实践");
pub const FEATURED_SUBTITLE: Text =
    text("Discover verified AI solutions for real-world scenarios", "发现真实场景的验证AI解决方案");

pub const INDUSTRIES_TITLE: Text = text("Explore by Industry", "按行业探索");
pub const INDUSTRIES_SUBTITLE: Text = text(
    "Covering 6 industries, 14+ verified AI solutions",
    "覆盖6个行业，14+个验证AI解决方案",
);

pub const APPROACH_TITLE: Text = text(
    "Real Scenarios • Fair Competition • Single Best",
    "真实场景 • 公平竞争 • 唯一最佳",
);
pub const APPROACH_DESCRIPTION: Text = text(
    "Through the \"Arena\" mechanism, we fairly test AI practices in real business scenarios \
     and recommend only verified best practices.",
    "通过\"Arena\"机制，我们在真实业务场景中公平测试AI实践，只推荐验证的最佳实践。",
);
pub const APPROACH_STEPS: [Card; 3] = [
    card(
        text("Define Real-world Scenarios", "定义真实场景"),
        text(
            "Select specific real-world problems and establish clear success criteria \
             and evaluation frameworks.",
            "选择具体的现实问题并建立明确的成功标准和评估框架。",
        ),
    ),
    card(
        text("Best Practices Compete", "最佳实践竞争"),
        text(
            "Multiple solutions tested under identical conditions using real data \
             and unified standards.",
            "多种解决方案在相同条件下使用真实数据和统一标准进行测试。",
        ),
    ),
    card(
        text("Verify and Recommend Best", "验证并推荐最佳"),
        text(
            "Select the optimal solution based on test results, provide complete code \
             and deployment guides.",
            "根据测试结果选择最优解决方案，提供完整代码和部署指南。",
        ),
    ),
];

pub const PRACTICE_TITLE: Text = text("Every Practice Includes", "每个实践包含");
pub const PRACTICE_SUBTITLE: Text = text(
    "Complete production-ready solutions, ready for immediate deployment",
    "完整的生产就绪解决方案，可立即部署",
);
pub const PRACTICE_FEATURES: [Card; 4] = [
    card(text("Live Demo", "在线演示"), text("Experience actual results online", "在线体验实际效果")),
    card(
        text("Complete Source Code", "完整源代码"),
        text("Open source, auditable, customizable", "开源、可审计、可定制"),
    ),
    card(text("Deployment Guide", "部署指南"), text("Deploy in 1-3 days", "1-3天内完成部署")),
    card(text("Performance Report", "性能报告"), text("Real test data", "真实测试数据")),
];

pub const CASE_STUDIES_TITLE: Text = text("Case Studies", "案例研究");
pub const CASE_STUDIES_SUBTITLE: Text = text("Real Companies, Real Results", "真实公司，真实成果");
pub const CASE_STUDY: CaseStudy = CaseStudy {
    title: text("NL2SQL Financial Reports", "NL2SQL财务报告"),
    company: text("Major Bank", "大型银行"),
    before: text("Manual: 2 hours", "手动：2小时"),
    after: text("AI: 5 minutes", "AI: 5 分钟"),
    efficiency: "24x",
    accuracy: "95%",
};
pub const BEFORE: Text = text("Before", "之前");
pub const AFTER: Text = text("After", "之后");
pub const EFFICIENCY: Text = text("Efficiency", "效率");
pub const ACCURACY: Text = text("Accuracy", "准确率");

pub const TRUST_TITLE: Text = text("Why Trust RWAI", "为什么信任RWAI");
pub const TRUST_POINTS: [Card; 3] = [
    card(
        text("Verified", "已验证"),
        text(
            "All solutions tested in real scenarios with traceable data",
            "所有解决方案在真实场景中测试，数据可追溯",
        ),
    ),
    card(
        text("Expert Team", "专家团队"),
        text(
            "AI experts from Tsinghua, Oxford and Fortune 500 Companies",
            "来自清华、牛津和财富500强公司的AI专家",
        ),
    ),
    card(
        text("Replicable", "可复制"),
        text(
            "All solutions tested in real scenarios with traceable practice",
            "所有解决方案在真实场景中测试，实践可追溯",
        ),
    ),
];

pub const FINAL_CTA_TITLE: Text = text("Ready to Find Your AI Solution?", "准备找到您的AI解决方案？");
pub const FINAL_CTA_DESCRIPTION: Text = text(
    "Browse verified AI blueprints, or join the developer community to contribute",
    "浏览验证的AI蓝图，或加入开发者社区做出贡献",
);
pub const FINAL_CTA_BUTTON: Text = text("Browse Blueprints", "浏览蓝图");
pub const FINAL_CTA_NOTE: Text = text(
    "Currently in beta testing, we welcome your feedback and suggestions",
    "目前正在beta测试中，欢迎您的反馈和建议",
);

// About page

pub const ABOUT_TITLE: Text = text("About RWAI", "关于 RWAI");
pub const ABOUT_SUBTITLE: Text =
    text("Building the future of real-world AI implementation", "构建现实世界AI实施的未来");
pub const ABOUT_INTRO: Text = text(
    "RWAI (Real-World AI) is an academic open-source project initiated by researchers from \
     Tsinghua University and Oxford University, in collaboration with Fortune 500 companies. \
     Our mission is to bridge the gap between AI research and real-world applications, \
     ensuring that AI technologies deliver tangible value in business operations.",
    "RWAI（Real-World AI，现实世界AI）是由清华大学和牛津大学研究人员发起，与财富500强企业合作的\
     学术开源项目。我们的使命是弥合AI研究与实际应用之间的差距，确保AI技术在商业运营中交付实际价值。",
);
pub const MISSION_TITLE: Text = text("Our Mission", "我们的使命");
pub const MISSION_TEXT: Text = text(
    "Democratize access to production-ready AI solutions by verifying, documenting, \
     and open-sourcing best practices from real-world deployments",
    "通过验证、记录和开源真实部署中的最佳实践，普及生产级AI解决方案的获取",
);
pub const VALUES: [Card; 3] = [
    card(
        text("Openness", "开放"),
        text("All practices are open source and transparent", "所有实践都是开源和透明的"),
    ),
    card(
        text("Rigor", "严谨"),
        text("Only solutions verified in real scenarios", "仅推荐在真实场景中验证的解决方案"),
    ),
    card(
        text("Collaboration", "协作"),
        text("Global community of researchers and practitioners", "研究人员和从业者的全球社区"),
    ),
];
pub const TEAM_TITLE: Text = text("Team", "团队");
pub const TEAM_SUBTITLE: Text = text(
    "AI experts from Tsinghua, Oxford, and other top institutions",
    "来自清华大学、牛津大学等顶级院校的AI专家",
);
pub const TEAM_GROUPS: [Card; 3] = [
    card(
        text("Academic Team", "学术团队"),
        text("Professors from Tsinghua, Oxford, etc.", "清华大学、牛津大学等院校教授"),
    ),
    card(
        text("Industry Partners", "行业合作伙伴"),
        text(
            "AI architects and senior engineers from Fortune 500",
            "世界500强企业AI架构师、资深工程师",
        ),
    ),
    card(
        text("Open Source Community", "开源社区"),
        text("Developers from open source communities worldwide", "来自全球的开源社区开发者"),
    ),
];
pub const ACHIEVEMENTS_TITLE: Text = text("Achievements", "成就");
pub const ACHIEVEMENTS: [(&str, Text); 5] = [
    ("50+", text("Verified AI Practices", "验证过的AI实践")),
    ("6", text("Industries Covered", "覆盖行业")),
    ("14+", text("Best Practices Listed", "列出的最佳实践")),
    ("5000+", text("GitHub Stars", "GitHub Stars")),
    ("100+", text("Contributors", "贡献者")),
];
pub const CONTACT_TITLE: Text = text("Contact", "联系方式");
pub const CONTACT_TEXT: Text = text(
    "Interested in collaborating or learning more? We'd love to hear from you.",
    "有兴趣合作或了解更多？我们很乐意收到您的来信。",
);
pub const CONTACT_LINKS: [ExternalLink; 3] = [
    ExternalLink {
        title: "GitHub",
        href: GITHUB_URL,
        description: text("View source code", "查看源代码"),
    },
    ExternalLink {
        title: "Email",
        href: CONTACT_EMAIL,
        description: text("Send email", "发送邮件"),
    },
    ExternalLink {
        title: "Discord",
        href: DISCORD_URL,
        description: text("Join discussion", "加入讨论"),
    },
];
pub const JOIN_TITLE: Text = text("Join Us", "加入我们");
pub const JOIN_TEXT: Text = text(
    "Join our team and help shape the future of real-world AI!",
    "加入我们的团队，共同塑造现实世界AI的未来！",
);
pub const POSITIONS_TITLE: Text = text("Open Positions", "开放职位");
pub const POSITIONS: [Text; 4] = [
    text("AI Researchers", "AI研究员"),
    text("Full-stack Developers", "全栈开发工程师"),
    text("Product Managers", "产品经理"),
    text("Community Managers", "社区经理"),
];
pub const APPLY: Text = text("Apply Now", "申请职位");
pub const ABOUT_CTA_TITLE: Text = text("Ready to Get Started?", "准备开始了吗？");
pub const ABOUT_CTA_TEXT: Text = text(
    "Explore AI best practices or submit your own solution",
    "浏览AI最佳实践，或提交您自己的方案参与竞技",
);
pub const ABOUT_CTA_BUTTON: Text = text("Browse Arena", "浏览竞技场");

// FAQ page

pub const FAQ_TITLE: Text = text("Frequently Asked Questions", "常见问题");
pub const FAQ_SUBTITLE: Text = text(
    "Find answers to common questions about RWAI Arena",
    "查找关于RWAI Arena的常见问题答案",
);
pub const FAQ_CATEGORIES: [FaqCategory; 4] = [
    FaqCategory {
        name: text("About RWAI Arena", "关于RWAI Arena"),
        entries: [
            card(
                text("What is RWAI Arena?", "RWAI Arena是什么？"),
                text(
                    "RWAI Arena is an open-source platform dedicated to finding and verifying \
                     the best AI practices for real-world business scenarios. We test AI \
                     solutions in actual environments and recommend only verified best practices.",
                    "RWAI Arena是一个致力于寻找和验证真实业务场景最佳AI实践的开源平台。\
                     我们在实际环境中测试AI解决方案，仅推荐经过验证的最佳实践。",
                ),
            ),
            card(
                text("How does the Arena mechanism work?", "Arena机制如何运作？"),
                text(
                    "The Arena mechanism follows three steps: (1) Define real-world scenarios, \
                     (2) Best practices compete under identical conditions, (3) Verify and \
                     recommend the best solution based on test results.",
                    "Arena机制遵循三个步骤：(1) 定义真实场景，(2) 最佳实践在相同条件下竞争，\
                     (3) 基于测试结果验证并推荐最佳方案。",
                ),
            ),
            card(
                text(
                    "What makes RWAI different from other AI evaluation platforms?",
                    "RWAI与其他AI评估平台有何不同？",
                ),
                text(
                    "Unlike academic benchmarks, RWAI focuses on real-world business scenarios. \
                     We evaluate complete implementations rather than just model performance, \
                     considering factors like cost, deployment complexity, and operational \
                     requirements.",
                    "与学术基准不同，RWAI专注于真实业务场景。我们评估完整的实施方案而非仅模型性能，\
                     考虑成本、部署复杂度和运营需求等因素。",
                ),
            ),
        ],
    },
    FaqCategory {
        name: text("Participation", "参与方式"),
        entries: [
            card(
                text("How can I submit my AI practice to the Arena?", "如何向Arena提交我的AI实践？"),
                text(
                    "You can submit your AI practice through our GitHub repository. Prepare \
                     your code, documentation, and deployment guide, then submit a pull request \
                     with complete information about your solution.",
                    "您可以通过我们的GitHub仓库提交AI实践。准备您的代码、文档和部署指南，\
                     然后提交包含完整解决方案信息的拉取请求。",
                ),
            ),
            card(
                text("Can I participate if I'm not a developer?", "如果不是开发者，可以参与吗？"),
                text(
                    "Absolutely! You can participate by voting on solutions, providing feedback, \
                     sharing your use cases, or helping improve documentation. Community \
                     contributions are valuable in many ways.",
                    "当然可以！您可以通过对方案投票、提供反馈、分享用例或帮助改进文档来参与。\
                     社区贡献在许多方面都很有价值。",
                ),
            ),
            card(
                text("How are Arena solutions evaluated?", "Arena的解决方案如何评估？"),
                text(
                    "Solutions are evaluated across four dimensions: Quality (accuracy), \
                     Efficiency (speed and resource usage), Cost (deployment and operation \
                     expenses), and Trust (security and compliance).",
                    "解决方案从四个维度评估：质量（准确性）、效率（速度和资源使用）、\
                     成本（部署和运营费用）、信任（安全性和合规性）。",
                ),
            ),
        ],
    },
    FaqCategory {
        name: text("Technical Questions", "技术问题"),
        entries: [
            card(
                text("What technologies are used in RWAI Arena?", "RWAI Arena使用哪些技术？"),
                text(
                    "RWAI Arena is built with Next.js 16+, TypeScript, Tailwind CSS, and \
                     next-intl for internationalization. We use Framer Motion for animations \
                     and Recharts for data visualization.",
                    "RWAI Arena使用Next.js 16+、TypeScript、Tailwind CSS和next-intl进行国际化构建。\
                     我们使用Framer Motion进行动画，使用Recharts进行数据可视化。",
                ),
            ),
            card(
                text("Is RWAI Arena open source?", "RWAI Arena是开源的吗？"),
                text(
                    "Yes, RWAI Arena is completely open source. All code, practices, and \
                     documentation are available on our GitHub repository under an open-source \
                     license.",
                    "是的，RWAI Arena完全开源。所有代码、实践和文档都在我们的GitHub仓库中以开源许可证提供。",
                ),
            ),
            card(
                text(
                    "Can I deploy RWAI Arena for my own organization?",
                    "可以为自己的组织部署RWAI Arena吗？",
                ),
                text(
                    "Yes, RWAI Arena is designed to be self-hostable. You can deploy it on your \
                     own infrastructure following our deployment guide available in the \
                     repository.",
                    "可以，RWAI Arena设计为可自托管。您可以根据仓库中提供的部署指南在自己的基础设施上部署。",
                ),
            ),
        ],
    },
    FaqCategory {
        name: text("Licensing and Usage", "许可和使用"),
        entries: [
            card(
                text("What license does RWAI Arena use?", "RWAI Arena使用什么许可证？"),
                text(
                    "RWAI Arena uses the MIT License for the platform code. Individual AI \
                     practices may have their own licenses, which are clearly indicated in each \
                     practice's repository.",
                    "RWAI Arena平台代码使用MIT许可证。单个AI实践可能有自己的许可证，在每个实践的仓库中明确标示。",
                ),
            ),
            card(
                text(
                    "Can I use RWAI Arena for commercial purposes?",
                    "可以将RWAI Arena用于商业目的吗？",
                ),
                text(
                    "Yes, both the RWAI Arena platform and the verified practices can be used for \
                     commercial purposes. Please check individual practice licenses for specific \
                     terms.",
                    "可以，RWAI Arena平台和验证过的实践都可以用于商业目的。具体条款请查看各个实践的许可证。",
                ),
            ),
            card(
                text("How do I cite RWAI Arena in academic work?", "在学术工作中如何引用RWAI Arena？"),
                text(
                    "When citing RWAI Arena, please use the following format: \"RWAI Arena: \
                     Real-World AI Best Practices Platform. https://rwai-arena.org\"",
                    "引用RWAI Arena时，请使用以下格式：\"RWAI Arena: 现实世界AI最佳实践平台. \
                     https://rwai-arena.org\"",
                ),
            ),
        ],
    },
];
pub const FAQ_CONTACT_TITLE: Text = text("Still have questions?", "仍有问题？");
pub const FAQ_CONTACT_TEXT: Text = text(
    "If you couldn't find the answer you're looking for, feel free to reach out to us.",
    "如果您没有找到想要的答案，请随时联系我们。",
);
pub const SEND_EMAIL: Text = text("Send Email", "发送邮件");

// Arena pages

pub const ARENA_TITLE: Text = text("Real AI Arena", "真实AI竞技场");
pub const ARENA_SUBTITLE: Text =
    text("Define the Best Practice for Your Business Tasks", "为你的业务任务，定义唯一最优实践");
pub const FILTER_BY_INDUSTRY: Text = text("Filter by Industry", "按行业筛选");
pub const ALL_INDUSTRIES: Text = text("All Industries", "全部行业");
pub const FILTER_BY_CATEGORY: Text = text("Filter by Category", "按类别筛选");
pub const ALL_CATEGORIES: Text = text("All Categories", "全部类别");
pub const ARENA_NAME: Text = text("Arena Name", "Arena名称");
pub const ACTION: Text = text("Action", "操作");
pub const VIEW_DETAILS: Text = text("View Details", "查看详情");
pub const NO_RESULTS_TITLE: Text = text("No Solutions Found", "暂无此组合的方案");
pub const NO_RESULTS_TEXT: Text = text(
    "This industry and category combination is coming soon.",
    "该行业与类别的组合正在开发中。您可以查看其他方案，或联系我们提交您的竞技场方案。",
);
pub const CLEAR_FILTERS: Text = text("Clear Filters", "清除筛选");
pub const BACK_TO_LIST: Text = text("Back to Arena List", "返回Arena列表");
pub const CONTACT_EXPERT: Text = text("Contact Expert", "联系专家");
pub const HIGHLIGHTS: Text = text("Highlights", "亮点");
pub const VIEW_ON_GITHUB: Text = text("View on GitHub", "在GitHub查看");
pub const NO_CONTENT: Text = text(
    "Detailed documentation for this arena is coming soon.",
    "该竞技场的详细文档即将发布。",
);
