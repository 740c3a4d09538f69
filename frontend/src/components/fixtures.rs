//! 财务、客服、优惠码与通知推送的展示数据
//!
//! 这几类数据后端还没有列表接口，页面先用本地数据渲染，
//! 导出报表也基于这些数据在浏览器中生成。

use sakayhub_shared::export::ExportRow;
use chrono::NaiveDate;
use sakayhub_shared::format::{format_amount, parse_day};
use sakayhub_shared::forms::{PromoDraft, PromoKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: &'static str,
    pub kind: &'static str,
    pub amount: f64,
    pub commission: f64,
    pub customer: &'static str,
    pub driver: &'static str,
    pub status: &'static str,
    pub timestamp: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payout {
    pub id: &'static str,
    pub driver: &'static str,
    pub amount: f64,
    pub rides: u32,
    pub status: &'static str,
    pub requested: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromoCode {
    pub code: String,
    pub kind: String,
    pub value: String,
    pub used: u32,
    /// `None` means unlimited
    pub limit: Option<u32>,
    pub status: String,
    pub expires: Option<String>,
}

impl PromoCode {
    fn seed(
        code: &str,
        kind: &str,
        value: &str,
        used: u32,
        limit: Option<u32>,
        status: &str,
        expires: Option<&str>,
    ) -> Self {
        Self {
            code: code.to_string(),
            kind: kind.to_string(),
            value: value.to_string(),
            used,
            limit,
            status: status.to_string(),
            expires: expires.map(str::to_string),
        }
    }

    /// 新建的优惠码，草稿须已通过校验
    pub fn from_draft(draft: &PromoDraft) -> Self {
        let amount = draft.value.trim().parse::<f64>().unwrap_or_default();
        let value = match draft.kind {
            Some(PromoKind::Discount) => format!("{}%", amount),
            _ => format_amount(amount),
        };
        Self {
            code: draft.normalized_code(),
            kind: draft.kind.map_or("", |k| k.value()).to_string(),
            value,
            used: 0,
            limit: draft.max_usage.trim().parse().ok(),
            status: if draft.active { "active" } else { "scheduled" }.to_string(),
            expires: draft
                .expiry
                .filter(|_| draft.has_expiry)
                .map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }

    pub fn usage(&self) -> String {
        match self.limit {
            Some(limit) => format!("{}/{}", self.used, limit),
            None => format!("{}/∞", self.used),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupportTicket {
    pub id: &'static str,
    pub customer: &'static str,
    pub subject: &'static str,
    pub category: &'static str,
    pub priority: &'static str,
    pub status: &'static str,
    pub assignee: &'static str,
    pub created: &'static str,
    pub last_reply: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub audience: &'static str,
    pub date: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PushNotification {
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    /// info / success / warning / promo
    pub kind: &'static str,
    pub sent: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: &'static str,
    pub name: &'static str,
    /// email / sms / push
    pub channel: &'static str,
    pub recipients: u64,
    /// 短信按送达计，邮件与推送按打开计
    pub reached: u64,
    pub clicked: u64,
    pub status: &'static str,
}

impl Campaign {
    pub fn reached_label(&self) -> &'static str {
        if self.channel == "sms" { "Delivered" } else { "Opened" }
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TXN001",
            kind: "ride",
            amount: 180.0,
            commission: 36.0,
            customer: "John Doe",
            driver: "Mike Wilson",
            status: "completed",
            timestamp: "2024-01-15T14:30",
        },
        Transaction {
            id: "TXN002",
            kind: "delivery",
            amount: 45.0,
            commission: 9.0,
            customer: "Maria Santos",
            driver: "Jose Cruz",
            status: "completed",
            timestamp: "2024-01-15T14:15",
        },
        Transaction {
            id: "TXN003",
            kind: "refund",
            amount: -200.0,
            commission: -40.0,
            customer: "Robert Kim",
            driver: "Anna Garcia",
            status: "processed",
            timestamp: "2024-01-15T13:45",
        },
        Transaction {
            id: "TXN004",
            kind: "ride",
            amount: 320.0,
            commission: 64.0,
            customer: "Lisa Park",
            driver: "Jose Cruz",
            status: "pending",
            timestamp: "2024-01-14T19:10",
        },
        Transaction {
            id: "TXN005",
            kind: "delivery",
            amount: 95.0,
            commission: 19.0,
            customer: "David Lee",
            driver: "Mike Wilson",
            status: "completed",
            timestamp: "2024-01-13T08:45",
        },
        Transaction {
            id: "TXN006",
            kind: "ride",
            amount: 1250.0,
            commission: 250.0,
            customer: "Carla Reyes",
            driver: "Anna Garcia",
            status: "completed",
            timestamp: "2024-01-12T22:05",
        },
    ]
}

pub fn payouts() -> Vec<Payout> {
    vec![
        Payout {
            id: "PAY001",
            driver: "Mike Wilson",
            amount: 2450.0,
            rides: 12,
            status: "pending",
            requested: "2024-01-15",
        },
        Payout {
            id: "PAY002",
            driver: "Jose Cruz",
            amount: 1890.0,
            rides: 8,
            status: "approved",
            requested: "2024-01-14",
        },
        Payout {
            id: "PAY003",
            driver: "Anna Garcia",
            amount: 3120.0,
            rides: 15,
            status: "rejected",
            requested: "2024-01-14",
        },
    ]
}

pub fn promo_codes() -> Vec<PromoCode> {
    vec![
        PromoCode::seed("NEWUSER50", "discount", "50%", 245, Some(500), "active", Some("2024-02-15")),
        PromoCode::seed("DELIVERY20", "cashback", "$20", 89, Some(200), "active", Some("2024-01-31")),
        PromoCode::seed("HOLIDAY50", "percentage", "50%", 890, Some(1000), "expired", Some("2024-01-01")),
        PromoCode::seed("REFER25", "fixed", "$25", 234, None, "active", None),
        PromoCode::seed("SUMMER24", "discount", "15%", 0, Some(300), "scheduled", Some("2024-06-30")),
    ]
}

pub fn tickets() -> Vec<SupportTicket> {
    vec![
        SupportTicket {
            id: "SUP001",
            customer: "John Doe",
            subject: "Refund Request - Cancelled Ride",
            category: "refund",
            priority: "high",
            status: "open",
            assignee: "Sarah Chen",
            created: "2024-01-15T14:30",
            last_reply: "2024-01-15T15:45",
        },
        SupportTicket {
            id: "SUP002",
            customer: "Maria Santos",
            subject: "Driver was rude during delivery",
            category: "complaint",
            priority: "medium",
            status: "resolving",
            assignee: "Mike Wilson",
            created: "2024-01-15T13:15",
            last_reply: "2024-01-15T14:20",
        },
        SupportTicket {
            id: "SUP003",
            customer: "Robert Kim",
            subject: "App not working properly",
            category: "technical",
            priority: "low",
            status: "resolved",
            assignee: "Anna Garcia",
            created: "2024-01-14T16:20",
            last_reply: "2024-01-15T09:30",
        },
        SupportTicket {
            id: "SUP004",
            customer: "Lisa Park",
            subject: "Food order not delivered",
            category: "refund",
            priority: "high",
            status: "open",
            assignee: "Sarah Chen",
            created: "2024-01-14T19:45",
            last_reply: "2024-01-14T20:10",
        },
        SupportTicket {
            id: "SUP005",
            customer: "David Lee",
            subject: "Wrong fare calculation",
            category: "billing",
            priority: "medium",
            status: "open",
            assignee: "Mike Wilson",
            created: "2024-01-14T11:30",
            last_reply: "2024-01-14T12:05",
        },
        SupportTicket {
            id: "SUP006",
            customer: "Carla Reyes",
            subject: "Cannot update payment method",
            category: "technical",
            priority: "low",
            status: "resolving",
            assignee: "Anna Garcia",
            created: "2024-01-13T09:00",
            last_reply: "2024-01-13T10:15",
        },
    ]
}

impl ExportRow for Transaction {
    fn headers() -> &'static [&'static str] {
        &["ID", "Type", "Amount", "Commission", "Customer", "Driver", "Status", "Timestamp"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.kind.to_string(),
            format_amount(self.amount),
            format_amount(self.commission),
            self.customer.to_string(),
            self.driver.to_string(),
            self.status.to_string(),
            self.timestamp.to_string(),
        ]
    }

    fn date(&self) -> Option<NaiveDate> {
        parse_day(self.timestamp)
    }

    fn kind(&self) -> Option<&str> {
        Some(self.kind)
    }

    fn status(&self) -> &str {
        self.status
    }
}

impl ExportRow for Payout {
    fn headers() -> &'static [&'static str] {
        &["ID", "Driver", "Amount", "Rides", "Status", "Requested"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.driver.to_string(),
            format_amount(self.amount),
            self.rides.to_string(),
            self.status.to_string(),
            self.requested.to_string(),
        ]
    }

    fn date(&self) -> Option<NaiveDate> {
        parse_day(self.requested)
    }

    fn status(&self) -> &str {
        self.status
    }
}

impl ExportRow for PromoCode {
    fn headers() -> &'static [&'static str] {
        &["Code", "Type", "Value", "Usage", "Status", "Expires"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.kind.clone(),
            self.value.clone(),
            self.usage(),
            self.status.clone(),
            self.expires.clone().unwrap_or_else(|| "No expiry".to_string()),
        ]
    }

    fn date(&self) -> Option<NaiveDate> {
        self.expires.as_deref().and_then(parse_day)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.kind)
    }

    fn status(&self) -> &str {
        &self.status
    }
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "A001",
            title: "System Maintenance",
            message: "Scheduled maintenance on Sunday 2AM-4AM",
            audience: "All Users",
            date: "2024-01-15",
            status: "sent",
        },
        Announcement {
            id: "A002",
            title: "New Service Area",
            message: "We've expanded to Downtown District",
            audience: "Drivers",
            date: "2024-01-14",
            status: "scheduled",
        },
        Announcement {
            id: "A003",
            title: "Holiday Surge Pricing",
            message: "Special rates during holiday season",
            audience: "Customers",
            date: "2024-01-13",
            status: "sent",
        },
        Announcement {
            id: "A004",
            title: "Driver Training Program",
            message: "Free safety training available",
            audience: "Drivers",
            date: "2024-01-12",
            status: "draft",
        },
    ]
}

pub fn notifications() -> Vec<PushNotification> {
    vec![
        PushNotification {
            id: "N001",
            title: "Ride Completed",
            message: "Your ride to Downtown has been completed",
            kind: "info",
            sent: "2 hours ago",
        },
        PushNotification {
            id: "N002",
            title: "Payment Received",
            message: "Payment of $25.50 received successfully",
            kind: "success",
            sent: "3 hours ago",
        },
        PushNotification {
            id: "N003",
            title: "Document Expiring",
            message: "Your driving license expires in 30 days",
            kind: "warning",
            sent: "1 day ago",
        },
        PushNotification {
            id: "N004",
            title: "New Promotion",
            message: "20% off your next 5 rides this week",
            kind: "promo",
            sent: "2 days ago",
        },
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "C001",
            name: "Welcome Series",
            channel: "email",
            recipients: 1250,
            reached: 892,
            clicked: 156,
            status: "active",
        },
        Campaign {
            id: "C002",
            name: "Driver Onboarding",
            channel: "sms",
            recipients: 85,
            reached: 82,
            clicked: 23,
            status: "completed",
        },
        Campaign {
            id: "C003",
            name: "Holiday Promo",
            channel: "push",
            recipients: 5420,
            reached: 3201,
            clicked: 456,
            status: "active",
        },
        Campaign {
            id: "C004",
            name: "Safety Reminder",
            channel: "email",
            recipients: 890,
            reached: 445,
            clicked: 67,
            status: "draft",
        },
    ]
}
