/// Stylesheet for both pages. User bubbles sit on the right in the accent
/// colour, bot bubbles on the left in white.
pub const APP_CSS: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-panel: #f9f9f9;
    --color-text-primary: #333333;
    --color-accent: #007bff;
    --color-accent-hover: #0056b3;
    --color-danger: #dc3545;
    --color-danger-hover: #c82333;
    --color-input-border: #dddddd;
    --color-chat-user-bg: #007bff;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #ffffff;
    --color-chat-assistant-text: #333333;
}
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
body { font-family: "Poppins", sans-serif; background: var(--color-bg-primary); color: var(--color-text-primary); margin: 0; }
.app { padding: 30px; max-width: 800px; margin: 0 auto; }
.app-title { text-align: center; }
.main-container {
    background: var(--color-bg-panel);
    padding: 12px;
    border-radius: 12px;
    max-width: 1000px;
    height: 75vh;
    margin: 0 auto;
    box-shadow: 0 10px 16px rgba(0, 0, 0, 0.1);
    display: flex;
    flex-direction: column;
    animation: fade-in 0.5s ease-in-out;
}
.page-title { text-align: center; margin-bottom: 20px; }
.chat-list {
    flex-grow: 1;
    overflow-y: auto;
    margin-bottom: 10px;
    display: flex;
    flex-direction: column;
    gap: 15px;
    padding-bottom: 20px;
}
.message-row { display: flex; }
.message-row.user { justify-content: flex-end; }
.message-row.assistant { justify-content: flex-start; }
.bubble {
    padding: 8px 16px;
    border-radius: 10px;
    max-width: 75%;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    font-size: 14px;
    word-wrap: break-word;
    animation: fade-in 0.5s ease-in-out;
}
.bubble p { margin: 4px 0; }
.bubble.user { background: var(--color-chat-user-bg); color: var(--color-chat-user-text); }
.bubble.assistant { background: var(--color-chat-assistant-bg); color: var(--color-chat-assistant-text); }
.composer { display: flex; gap: 10px; }
.composer textarea {
    flex-grow: 1;
    padding: 8px;
    font-size: 14px;
    border-radius: 6px;
    border: 1px solid var(--color-input-border);
    outline: none;
    resize: none;
}
.composer textarea:focus { border-color: var(--color-accent); }
.btn {
    padding: 8px 20px;
    color: #ffffff;
    font-size: 14px;
    border: none;
    border-radius: 6px;
    cursor: pointer;
    transition: background-color 0.3s;
}
.btn-primary { background: var(--color-accent); }
.btn-primary:hover { background: var(--color-accent-hover); }
.btn-primary:disabled { opacity: 0.6; cursor: default; }
.btn-danger { background: var(--color-danger); }
.btn-danger:hover { background: var(--color-danger-hover); }
.history-actions { display: flex; justify-content: space-between; margin-top: 20px; }
.history-actions .btn { width: 45%; font-size: 16px; padding: 12px; }
.startup-error { color: var(--color-danger); text-align: center; }
"#;
