//! Global CSS styles for QuestForge.
//!
//! Pixel-RPG aesthetic: hard borders, offset shadows, dungeon-dark palette.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* DUNGEON (Backgrounds) */
  --dungeon-dark: #15121f;
  --dungeon-floor: #1e1a2e;
  --dungeon-border: #2e2845;

  /* QUEST (Accents) */
  --quest-xp: #4ade80;
  --quest-health: #f87171;
  --quest-gold: #facc15;
  --quest-mana: #38bdf8;
  --quest-epic: #c084fc;
  --quest-legendary: #fb923c;
  --quest-rare: #60a5fa;

  /* TEXT */
  --text-primary: #ece9fd;
  --text-secondary: rgba(236, 233, 253, 0.72);
  --text-muted: rgba(236, 233, 253, 0.5);

  /* SEMANTIC */
  --accent: #2dd4bf;
  --muted-surface: rgba(46, 40, 69, 0.35);

  /* Typography */
  --font-pixel: 'Press Start 2P', 'VT323', 'JetBrains Mono', monospace;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Pixel frame */
  --pixel-border: 2px solid var(--dungeon-border);
  --pixel-shadow: 3px 3px 0 rgba(0, 0, 0, 0.45);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  background: var(--dungeon-dark);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

button {
  font-family: inherit;
  cursor: pointer;
}

button:disabled {
  cursor: not-allowed;
}

svg {
  flex-shrink: 0;
}

/* === App Shell === */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  max-width: 640px;
  margin: 0 auto;
  padding: 1rem;
}

.app-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1rem;
  background: var(--dungeon-floor);
  border: var(--pixel-border);
  box-shadow: var(--pixel-shadow);
  margin-bottom: 1rem;
}

.app-title {
  font-family: var(--font-pixel);
  font-size: 0.9rem;
  letter-spacing: 0.08em;
  color: var(--quest-gold);
  text-shadow: 2px 2px 0 rgba(0, 0, 0, 0.6);
  text-transform: uppercase;
}

.app-header__actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.coin-counter {
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  padding: 0.3rem 0.6rem;
  font-size: 0.75rem;
  color: var(--quest-gold);
  background: var(--muted-surface);
  border: 1px solid var(--quest-gold);
}

.header-btn {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.35rem 0.7rem;
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--text-secondary);
  background: var(--dungeon-dark);
  border: var(--pixel-border);
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.header-btn:hover {
  color: var(--text-primary);
  border-color: var(--quest-mana);
}

/* === Board === */
.habit-board {
  flex: 1;
}

.board-heading {
  font-family: var(--font-pixel);
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-secondary);
  margin-bottom: 0.75rem;
}

.board-empty {
  padding: 2rem 1rem;
  text-align: center;
  border: 2px dashed var(--dungeon-border);
  color: var(--text-secondary);
  font-size: 0.8rem;
}

.board-empty__hint {
  margin-top: 0.5rem;
  font-size: 0.7rem;
  color: var(--text-muted);
}

.habit-grid {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

/* === Habit Card === */
.habit-card {
  background: var(--dungeon-floor);
  border: 2px solid var(--dungeon-border);
  box-shadow: var(--pixel-shadow);
  padding: 1rem;
  transition: opacity var(--transition-normal);
}

.habit-card--build {
  border-color: var(--quest-xp);
}

.habit-card--break {
  border-color: var(--quest-health);
}

.habit-card--done {
  opacity: 0.7;
}

.habit-card__body {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
}

.habit-card__info {
  flex: 1;
  min-width: 0;
}

.habit-card__meta {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.25rem;
}

.polarity-badge {
  font-size: 0.6rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.polarity-badge--build {
  color: var(--quest-xp);
}

.polarity-badge--break {
  color: var(--quest-health);
}

.streak-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  font-size: 0.6rem;
  color: var(--quest-legendary);
}

.habit-card__title {
  font-size: 0.8rem;
  margin-bottom: 0.4rem;
}

.habit-card__description {
  font-size: 0.65rem;
  color: var(--text-muted);
  margin-bottom: 0.4rem;
}

.habit-card__stats {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-size: 0.62rem;
}

.stat-muted {
  color: var(--text-muted);
}

.stat-trend {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
}

.stat-momentum {
  color: var(--quest-gold);
}

.habit-card__rewards {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  margin-top: 0.45rem;
  font-size: 0.62rem;
}

.reward-xp {
  color: var(--quest-xp);
}

.reward-coins {
  display: inline-flex;
  align-items: center;
  gap: 0.2rem;
  color: var(--quest-gold);
}

.habit-card__difficulty {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-top: 0.5rem;
}

.difficulty-label {
  font-size: 0.5rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

.difficulty-track {
  display: flex;
  gap: 0.15rem;
}

.difficulty-pip {
  width: 0.5rem;
  height: 0.5rem;
  background: var(--muted-surface);
}

.difficulty-pip--filled {
  background: var(--quest-rare);
}

.habit-card__actions {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.habit-card__done-mark {
  width: 2rem;
  height: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--quest-xp);
}

/* === Pixel Button === */
.pixel-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.3rem;
  border: 2px solid var(--dungeon-border);
  background: var(--dungeon-dark);
  color: var(--text-primary);
  box-shadow: 2px 2px 0 rgba(0, 0, 0, 0.45);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.pixel-btn:active:not(:disabled) {
  transform: translate(2px, 2px);
  box-shadow: none;
}

.pixel-btn:disabled {
  opacity: 0.5;
  box-shadow: none;
}

.pixel-btn--sm {
  padding: 0.3rem 0.6rem;
  font-size: 0.62rem;
  text-transform: uppercase;
  letter-spacing: 0.06em;
}

.pixel-btn--icon {
  width: 2rem;
  height: 2rem;
  padding: 0;
}

.pixel-btn--default {
  border-color: var(--quest-mana);
  color: var(--quest-mana);
}

.pixel-btn--default:hover:not(:disabled) {
  background: rgba(56, 189, 248, 0.12);
}

.pixel-btn--xp {
  border-color: var(--quest-xp);
  color: var(--quest-xp);
}

.pixel-btn--xp:hover:not(:disabled) {
  background: rgba(74, 222, 128, 0.12);
}

.pixel-btn--danger {
  border-color: var(--quest-health);
  color: var(--quest-health);
}

.pixel-btn--danger:hover:not(:disabled) {
  background: rgba(248, 113, 113, 0.12);
}

.pixel-btn--ghost {
  border-color: var(--dungeon-border);
  color: var(--text-muted);
  box-shadow: none;
}

.pixel-btn--ghost:hover:not(:disabled) {
  color: var(--text-secondary);
}

/* === Overlays === */
.overlay-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(21, 18, 31, 0.85);
  backdrop-filter: blur(3px);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  z-index: 50;
}

.overlay-panel {
  background: var(--dungeon-floor);
  border: var(--pixel-border);
  box-shadow: var(--pixel-shadow);
  padding: 1.5rem;
  width: 100%;
  max-width: 32rem;
  max-height: 80vh;
  overflow-y: auto;
}

.overlay-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.5rem;
}

.overlay-heading {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.overlay-glyph {
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--dungeon-dark);
  border: var(--pixel-border);
}

.overlay-glyph--mana {
  background: var(--quest-mana);
}

.overlay-glyph--gold {
  background: var(--quest-gold);
  border-color: var(--quest-gold);
}

.overlay-title {
  font-family: var(--font-pixel);
  font-size: 0.8rem;
  color: var(--text-primary);
  text-shadow: 2px 2px 0 rgba(0, 0, 0, 0.6);
}

.overlay-subtitle {
  font-size: 0.62rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

.overlay-close {
  background: none;
  border: none;
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.overlay-close:hover {
  color: var(--text-primary);
}

/* === Help Panel === */
.help-sections {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.help-section {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 0.75rem;
  border: 2px solid var(--dungeon-border);
  background: var(--muted-surface);
  transition: background var(--transition-fast);
}

.help-section:hover {
  background: rgba(46, 40, 69, 0.55);
}

.help-section__glyph {
  width: 2rem;
  height: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  color: var(--quest-mana);
  background: rgba(56, 189, 248, 0.12);
  border: 1px solid rgba(56, 189, 248, 0.3);
}

.help-section__text {
  flex: 1;
}

.help-section__title {
  font-size: 0.75rem;
  margin-bottom: 0.25rem;
}

.help-section__description {
  font-size: 0.62rem;
  color: var(--text-muted);
  line-height: 1.7;
}

.help-tip {
  margin-top: 1.5rem;
  padding: 0.75rem;
  border: 2px solid rgba(250, 204, 21, 0.3);
  background: rgba(250, 204, 21, 0.1);
}

.help-tip p {
  font-size: 0.62rem;
  color: var(--quest-gold);
  text-align: center;
}

/* === Shop Panel === */
.shop-categories {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.shop-category__header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.shop-category__title {
  font-size: 0.72rem;
  text-transform: uppercase;
  letter-spacing: 0.12em;
}

.shop-category__items {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.shop-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem;
  border: 2px solid var(--dungeon-border);
  background: var(--muted-surface);
}

.shop-item__glyph {
  width: 2rem;
  height: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  border: 2px solid currentColor;
}

.shop-item__info {
  flex: 1;
  min-width: 0;
}

.shop-item__name {
  font-size: 0.65rem;
}

.shop-item__description {
  font-size: 0.55rem;
  color: var(--text-muted);
}

.shop-item__meta {
  font-size: 0.55rem;
  color: var(--text-muted);
}

.shop-item__purchase {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.shop-item__cost {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  font-size: 0.65rem;
  color: var(--quest-gold);
}

/* Category accents color both header text and item tiles */
.shop-accent--epic {
  color: var(--quest-epic);
  border-color: var(--quest-epic);
}

.shop-accent--legendary {
  color: var(--quest-legendary);
  border-color: var(--quest-legendary);
}

.shop-accent--gold {
  color: var(--quest-gold);
  border-color: var(--quest-gold);
}

.shop-accent--accent {
  color: var(--accent);
  border-color: var(--accent);
}

.shop-accent--mana {
  color: var(--quest-mana);
  border-color: var(--quest-mana);
}

/* === Scrollbar === */
::-webkit-scrollbar {
  width: 8px;
}

::-webkit-scrollbar-track {
  background: var(--dungeon-dark);
}

::-webkit-scrollbar-thumb {
  background: var(--dungeon-border);
}

::-webkit-scrollbar-thumb:hover {
  background: var(--quest-mana);
}
"#;
