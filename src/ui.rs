use crate::dates::{format_date, today};

pub fn render_index() -> String {
    INDEX_HTML.replace("{{TODAY}}", &format_date(today()))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Данные по сборке и продаже</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #fbf6e9;
      --bg-2: #fde7a9;
      --ink: #2b2a28;
      --accent: #eab308;
      --accent-dark: #ca8a04;
      --order: #3b82f6;
      --volume: #10b981;
      --sales: #8b5cf6;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #fff4d6 60%, #faf6ee 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1100px, 100%);
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
      text-align: center;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
      text-align: center;
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 16px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    textarea {
      width: 100%;
      max-height: 6rem;
      padding: 12px 16px;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      font: inherit;
      resize: vertical;
      outline: none;
    }

    textarea:focus {
      border-color: var(--accent);
      box-shadow: 0 0 0 3px rgba(234, 179, 8, 0.25);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease, background 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.6;
      cursor: not-allowed;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(234, 179, 8, 0.3);
      justify-self: start;
    }

    .btn-primary:hover:not(:disabled) {
      background: var(--accent-dark);
    }

    .btn-refresh {
      background: var(--volume);
      color: white;
    }

    .toggle {
      background: rgba(47, 72, 88, 0.08);
      color: #4b4640;
    }

    .toggle.active {
      background: var(--order);
      color: white;
    }

    .load-row {
      display: flex;
      justify-content: center;
    }

    .spinner {
      width: 16px;
      height: 16px;
      border: 3px solid rgba(255, 255, 255, 0.6);
      border-top-color: transparent;
      border-radius: 50%;
      animation: spin 800ms linear infinite;
    }

    .waiting {
      display: grid;
      justify-items: center;
      gap: 10px;
      padding: 40px 0;
      border: 1px dashed rgba(234, 179, 8, 0.6);
      border-radius: 16px;
      background: rgba(254, 249, 195, 0.4);
      color: #6b645d;
    }

    .waiting .spinner {
      width: 36px;
      height: 36px;
      border-color: var(--accent);
      border-top-color: transparent;
    }

    .inline-error {
      margin: 0;
      color: var(--danger);
      font-size: 0.9rem;
    }

    .error-box {
      padding: 16px;
      border-radius: 16px;
      border: 1px solid rgba(198, 59, 43, 0.4);
      background: rgba(254, 226, 226, 0.8);
      color: var(--danger);
    }

    .error-box p {
      margin: 0;
    }

    .artifact img,
    .artifact embed {
      max-width: 100%;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.12);
    }

    .artifact img {
      max-height: 24rem;
      object-fit: contain;
    }

    .artifact embed {
      width: 100%;
      min-height: 400px;
    }

    .artifact a {
      color: var(--accent-dark);
      font-weight: 600;
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      align-items: center;
    }

    .totals {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .series-toggles {
      display: flex;
      flex-wrap: wrap;
      gap: 16px;
    }

    .series-toggles label {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      cursor: pointer;
      font-size: 0.95rem;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 400px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
      stroke-dasharray: 3 3;
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    [hidden] {
      display: none !important;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }

    @media (max-width: 600px) {
      .card {
        padding: 22px 18px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Данные по сборке и продаже.</h1>
      <p class="subtitle">Сегодня {{TODAY}}</p>
    </header>

    <section class="card" id="prompt-card">
      <h2>Что вы хотите увидеть?</h2>
      <textarea id="prompt" rows="3" placeholder="Введите пожелание..."></textarea>
      <button class="btn-primary" id="prompt-btn" type="button" disabled>Отправить</button>
      <p class="inline-error" id="prompt-error" hidden></p>
      <div class="waiting" id="prompt-waiting" hidden>
        <div class="spinner"></div>
        <strong>Ожидание ответа...</strong>
        <span>Файл загружается</span>
      </div>
      <div class="artifact" id="artifact" hidden></div>
    </section>

    <div class="load-row">
      <button class="btn-primary" id="load-btn" type="button">Загрузить данные</button>
    </div>

    <div class="error-box" id="data-error" hidden>
      <p><strong>Ошибка:</strong></p>
      <p id="data-error-text"></p>
    </div>

    <section class="card" id="chart-section" hidden>
      <div class="toolbar">
        <button class="btn-refresh" id="refresh-btn" type="button">Обновить</button>
        <button class="toggle active" type="button" data-chart="line">Линейный график</button>
        <button class="toggle" type="button" data-chart="bar">Столбчатая диаграмма</button>
      </div>

      <div class="totals">
        <div class="stat">
          <span class="label">Сумма заказа</span>
          <span class="value" id="total-orderSum" style="color: var(--order)">0</span>
        </div>
        <div class="stat">
          <span class="label">Объём</span>
          <span class="value" id="total-volume" style="color: var(--volume)">0</span>
        </div>
        <div class="stat">
          <span class="label">Продажи</span>
          <span class="value" id="total-sales" style="color: var(--sales)">0</span>
        </div>
      </div>

      <div class="series-toggles">
        <label><input type="checkbox" data-series="orderSum" checked /> Сумма заказа</label>
        <label><input type="checkbox" data-series="volume" checked /> Объём</label>
        <label><input type="checkbox" data-series="sales" checked /> Продажи</label>
      </div>

      <div class="chart-card">
        <svg id="chart" viewBox="0 0 960 400" aria-label="График" role="img"></svg>
      </div>
    </section>
  </main>

  <script>
    const SERIES = [
      { key: 'orderSum', name: 'Сумма заказа', color: '#3b82f6' },
      { key: 'volume', name: 'Объём', color: '#10b981' },
      { key: 'sales', name: 'Продажи', color: '#8b5cf6' }
    ];

    const state = {
      data: { loading: false, error: null, records: [], totals: null },
      chart: { type: 'line', visible: { orderSum: true, volume: true, sales: true } },
      prompt: { text: '', loading: false, error: null, blobUrl: null, contentType: null }
    };

    const promptEl = document.getElementById('prompt');
    const promptBtn = document.getElementById('prompt-btn');
    const promptErrorEl = document.getElementById('prompt-error');
    const promptWaitingEl = document.getElementById('prompt-waiting');
    const artifactEl = document.getElementById('artifact');
    const loadBtn = document.getElementById('load-btn');
    const refreshBtn = document.getElementById('refresh-btn');
    const dataErrorEl = document.getElementById('data-error');
    const dataErrorTextEl = document.getElementById('data-error-text');
    const chartSectionEl = document.getElementById('chart-section');
    const chartEl = document.getElementById('chart');
    const chartToggles = Array.from(document.querySelectorAll('[data-chart]'));
    const seriesToggles = Array.from(document.querySelectorAll('[data-series]'));

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    const formatNumber = (value) => Number(value || 0).toLocaleString('ru-RU');

    const setButtonLoading = (button, loading, idleLabel) => {
      button.innerHTML = loading
        ? '<span class="spinner"></span>Загрузка...'
        : idleLabel;
    };

    const renderPrompt = () => {
      const p = state.prompt;
      promptBtn.disabled = p.loading || !p.text.trim();
      setButtonLoading(promptBtn, p.loading, 'Отправить');
      promptErrorEl.hidden = !p.error;
      promptErrorEl.textContent = p.error || '';
      promptWaitingEl.hidden = !p.loading;

      if (p.loading || !p.blobUrl) {
        artifactEl.hidden = true;
        artifactEl.innerHTML = '';
        return;
      }

      const type = p.contentType || '';
      if (type.startsWith('image/')) {
        artifactEl.innerHTML = `<img src="${p.blobUrl}" alt="Ответ" />`;
      } else if (type.includes('pdf')) {
        artifactEl.innerHTML = `<embed src="${p.blobUrl}" type="application/pdf" />`;
      } else {
        artifactEl.innerHTML = `<a href="${p.blobUrl}" download="response.bin">Скачать файл</a>`;
      }
      artifactEl.hidden = false;
    };

    const releaseBlob = () => {
      if (state.prompt.blobUrl) {
        URL.revokeObjectURL(state.prompt.blobUrl);
        state.prompt.blobUrl = null;
      }
    };

    const sendPrompt = async () => {
      const p = state.prompt;
      p.loading = true;
      p.error = null;
      releaseBlob();
      p.contentType = null;
      renderPrompt();

      try {
        const res = await fetch('/api/prompt-webhook', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ prompt: p.text.trim() })
        });

        if (!res.ok) {
          const body = await res.json().catch(() => ({}));
          throw new Error(body.error || `HTTP ${res.status}`);
        }

        p.contentType = res.headers.get('content-type') || '';
        const blob = await res.blob();
        p.blobUrl = URL.createObjectURL(blob);
      } catch (err) {
        p.error = err instanceof Error ? err.message : 'Ошибка запроса';
      } finally {
        p.loading = false;
        renderPrompt();
      }
    };

    const niceMax = (value) => {
      if (value <= 0) {
        return 1;
      }
      const magnitude = Math.pow(10, Math.floor(Math.log10(value)));
      const step = [1, 2, 2.5, 5, 10].find((m) => m * magnitude >= value) || 10;
      return step * magnitude;
    };

    const renderChart = () => {
      const records = state.data.records;
      const series = SERIES.filter((s) => state.chart.visible[s.key]);
      if (!records.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">Нет данных</text>';
        return;
      }

      const width = 960;
      const height = 400;
      const left = 64;
      const right = 24;
      const top = 24;
      const bottom = 80;
      const plotWidth = width - left - right;
      const plotHeight = height - top - bottom;

      const peak = Math.max(0, ...records.flatMap((r) => series.map((s) => r[s.key] || 0)));
      const max = niceMax(peak);
      const y = (value) => top + plotHeight - (value / max) * plotHeight;

      const isBar = state.chart.type === 'bar';
      const slot = plotWidth / records.length;
      const x = (index) =>
        isBar || records.length === 1
          ? left + slot * index + slot / 2
          : left + (plotWidth * index) / (records.length - 1);

      const ticks = 5;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        grid += `<line class="chart-grid" x1="${left}" y1="${y(value)}" x2="${width - right}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${left - 8}" y="${y(value) + 4}" text-anchor="end">${formatNumber(value)}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(records.length / 16));
      const xLabels = records
        .map((record, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          const px = x(index);
          const py = height - bottom + 16;
          return `<text class="chart-label" x="${px}" y="${py}" text-anchor="end" transform="rotate(-45 ${px} ${py})">${escapeHtml(record.date)}</text>`;
        })
        .join('');

      let marks = '';
      if (isBar) {
        const groupWidth = slot * 0.8;
        const barWidth = series.length ? groupWidth / series.length : 0;
        records.forEach((record, index) => {
          const start = x(index) - groupWidth / 2;
          series.forEach((s, si) => {
            const value = record[s.key] || 0;
            const barTop = y(value);
            marks += `<rect x="${start + si * barWidth}" y="${barTop}" width="${Math.max(barWidth - 2, 1)}" height="${top + plotHeight - barTop}" fill="${s.color}"><title>${escapeHtml(record.date)}: ${s.name} ${formatNumber(value)}</title></rect>`;
          });
        });
      } else {
        series.forEach((s) => {
          const path = records
            .map((record, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(record[s.key] || 0).toFixed(2)}`)
            .join(' ');
          marks += `<path d="${path}" fill="none" stroke="${s.color}" stroke-width="2" />`;
          marks += records
            .map((record, index) => `<circle cx="${x(index)}" cy="${y(record[s.key] || 0)}" r="3" fill="white" stroke="${s.color}" stroke-width="2"><title>${escapeHtml(record.date)}: ${s.name} ${formatNumber(record[s.key])}</title></circle>`)
            .join('');
        });
      }

      const legend = series
        .map((s, i) => `<rect x="${left + i * 150}" y="4" width="12" height="12" fill="${s.color}" /><text class="chart-label" x="${left + i * 150 + 18}" y="14">${s.name}</text>`)
        .join('');

      chartEl.innerHTML = `${grid}${marks}${xLabels}${legend}`;
    };

    const renderData = () => {
      const d = state.data;
      loadBtn.disabled = d.loading;
      refreshBtn.disabled = d.loading;
      setButtonLoading(loadBtn, d.loading, 'Загрузить данные');
      setButtonLoading(refreshBtn, d.loading, 'Обновить');

      dataErrorEl.hidden = !d.error;
      dataErrorTextEl.textContent = d.error || '';

      chartSectionEl.hidden = d.records.length === 0;
      const totals = d.totals || { orderSum: 0, volume: 0, sales: 0 };
      SERIES.forEach((s) => {
        document.getElementById(`total-${s.key}`).textContent = formatNumber(totals[s.key]);
      });

      chartToggles.forEach((button) => {
        button.classList.toggle('active', button.dataset.chart === state.chart.type);
      });
      seriesToggles.forEach((input) => {
        input.checked = state.chart.visible[input.dataset.series];
      });

      renderChart();
    };

    const loadData = async () => {
      const d = state.data;
      d.loading = true;
      d.error = null;
      renderData();

      try {
        const res = await fetch('/api/chart-data', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({})
        });
        const result = await res.json();
        if (result.success) {
          d.records = result.data || [];
          d.totals = result.totals || null;
        } else {
          d.error = result.error || 'Ошибка загрузки данных';
        }
      } catch (err) {
        d.error = err instanceof Error ? err.message : 'Неизвестная ошибка';
      } finally {
        d.loading = false;
        renderData();
      }
    };

    promptEl.addEventListener('input', () => {
      state.prompt.text = promptEl.value;
      renderPrompt();
    });

    promptBtn.addEventListener('click', () => {
      sendPrompt();
    });

    loadBtn.addEventListener('click', () => {
      loadData();
    });

    refreshBtn.addEventListener('click', () => {
      loadData();
    });

    chartToggles.forEach((button) => {
      button.addEventListener('click', () => {
        state.chart.type = button.dataset.chart;
        renderData();
      });
    });

    seriesToggles.forEach((input) => {
      input.addEventListener('change', () => {
        const key = input.dataset.series;
        state.chart.visible[key] = !state.chart.visible[key];
        renderData();
      });
    });

    renderPrompt();
    renderData();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_includes_today_and_both_sections() {
        let html = render_index();
        assert!(html.contains(&format_date(today())));
        assert!(!html.contains("{{TODAY}}"));
        assert!(html.contains("/api/chart-data"));
        assert!(html.contains("/api/prompt-webhook"));
        assert!(html.contains("URL.revokeObjectURL"));
    }
}
