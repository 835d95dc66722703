//! 模态对话框
//!
//! 控制器在后台任务中调用 [`Dialogs`]，请求经 channel 送到事件循环，
//! 由界面弹窗展示；操作员按键后通过 oneshot 回传结果。

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::dashboard::Dialogs;

/// 等待界面处理的对话框
#[derive(Debug)]
pub enum DialogRequest {
    Confirm {
        message: String,
        reply: oneshot::Sender<bool>,
    },
    Alert {
        message: String,
        done: oneshot::Sender<()>,
    },
}

impl DialogRequest {
    pub fn message(&self) -> &str {
        match self {
            DialogRequest::Confirm { message, .. } | DialogRequest::Alert { message, .. } => {
                message
            }
        }
    }

    /// 回答对话框。提示框忽略 `accepted`
    pub fn resolve(self, accepted: bool) {
        match self {
            DialogRequest::Confirm { reply, .. } => {
                let _ = reply.send(accepted);
            }
            DialogRequest::Alert { done, .. } => {
                let _ = done.send(());
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TuiDialogs {
    tx: mpsc::UnboundedSender<DialogRequest>,
}

impl TuiDialogs {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DialogRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Dialogs for TuiDialogs {
    /// 界面已关闭时视为拒绝
    async fn confirm(&self, message: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = DialogRequest::Confirm {
            message: message.to_string(),
            reply,
        };
        if self.tx.send(request).is_err() {
            debug!("Dialog queue closed, declining: {}", message);
            return false;
        }
        answer.await.unwrap_or(false)
    }

    async fn alert(&self, message: &str) {
        let (done, dismissed) = oneshot::channel();
        let request = DialogRequest::Alert {
            message: message.to_string(),
            done,
        };
        if self.tx.send(request).is_ok() {
            let _ = dismissed.await;
        }
    }
}
