//! 界面文案
//!
//! 所有面向操作员的文本集中在这里（界面语言为俄语，与后端一致）

/// 主题
pub mod theme {
    pub const DAY: &str = "День";
    pub const NIGHT: &str = "Ночь";
}

/// 系统启停
pub mod system {
    pub const START_LABEL: &str = "Запустить";
    pub const STOP_LABEL: &str = "Остановить";
    pub const START_CONFIRM: &str = "Запустить систему CCTV с текущими настройками из раздела Settings?";
    pub const STARTED: &str = "Система запущена!\n\nНастройки применены автоматически.";
    pub const STOPPED: &str = "Система остановлена";
    pub const STATUS_RUNNING: &str = "Запущена";
    pub const STATUS_STOPPED: &str = "Остановлена";
    pub const COLOR_RUNNING: &str = "#4caf50";
    pub const COLOR_STOPPED: &str = "#f44336";
}

/// 摄像头设置
pub mod settings {
    pub fn applied(camera_id: u32) -> String {
        format!("Настройки для камеры {} применены", camera_id)
    }
}

/// 遮罩
pub mod masks {
    pub const DELETE_CONFIRM: &str = "Удалить эту маску?";
    pub const DELETE_LABEL: &str = "Удалить";

    pub fn item_label(camera_id: u32, filename: &str) -> String {
        format!("Камера {}: {}", camera_id, filename)
    }
}

/// 生物识别
pub mod biometric {
    pub const TRAINING: &str = "Обучение модели...";
    pub const TRAINED: &str = "Модель успешно обучена!";
    pub const NAME_REQUIRED: &str = "Введите имя пользователя";
    pub const PHOTOS_REQUIRED: &str = "Выберите фотографии";
    pub const UPLOADING: &str = "Загрузка фотографий...";
    pub const UPLOADED: &str = "Фотографии загружены!";
}

/// 归档
pub mod archive {
    pub const PASSWORD_HINT: &str = "Пароль для SSH";
    pub const PASSWORD_SAVED_HINT: &str = "••••••••";
    pub const HOST_REQUIRED: &str = "Укажите адрес сервера";
    pub const SETTINGS_SAVED: &str = "Настройки сохранены!";
    pub const DATE_REQUIRED: &str = "Выберите дату";
    pub const SEARCH_LABEL: &str = "Найти";
    pub const SEARCHING: &str = "Поиск...";
    pub const SEARCHING_PLACEHOLDER: &str = "Поиск файлов на сервере...";
    pub const NOT_FOUND: &str = "Файлы не найдены";
    pub const NOT_FOUND_DETAIL: &str = "На указанную дату записей не найдено";
    pub const SEARCH_FAILED: &str = "Ошибка при поиске";
    pub const SERVER_UNREACHABLE: &str = "Не удалось подключиться к серверу";
    pub const SELECT_ALL: &str = "Выбрать все";
    pub const DESELECT_ALL: &str = "Снять выбор";
    pub const DOWNLOAD_LABEL: &str = "Скачать выбранные";
    pub const NOTHING_SELECTED: &str = "Выберите файлы для скачивания";
    pub const CONNECTION_FAILED: &str = "Ошибка соединения";

    pub fn found(count: usize) -> String {
        format!("Найдено файлов: {}", count)
    }

    pub fn preparing(count: usize) -> String {
        format!("Подготовка {} файлов...", count)
    }

    pub fn ready(count: usize) -> String {
        format!("Готово! Скачивание {} файлов...", count)
    }

    pub fn partial_errors(count: usize) -> String {
        format!(" ({} ошибок)", count)
    }

    pub fn download_failed(reason: &str) -> String {
        format!("Ошибка скачивания: {}", reason)
    }
}

/// 登录
pub mod session {
    pub const LOGIN_FAILED: &str = "Ошибка входа";
    pub const SERVER_UNREACHABLE: &str = "Ошибка соединения с сервером";
}
