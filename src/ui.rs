use crate::models::BudgetView;
use crate::period::ViewType;

pub fn render_index(view: ViewType, budget: &BudgetView) -> String {
    INDEX_HTML
        .replace("{{VIEW}}", view.as_str())
        .replace("{{PERIOD}}", &budget.period)
        .replace("{{INCOME_ACTUAL}}", &format!("{:.2}", budget.summary.income_actual))
        .replace("{{INCOME_PLANNED}}", &format!("{:.2}", budget.summary.income_planned))
        .replace("{{EXPENSE_ACTUAL}}", &format!("{:.2}", budget.summary.expense_actual))
        .replace("{{EXPENSE_PLANNED}}", &format!("{:.2}", budget.summary.expense_planned))
        .replace("{{NET_ACTUAL}}", &format!("{:.2}", budget.summary.net_actual))
        .replace("{{NET_PLANNED}}", &format!("{:.2}", budget.summary.net_planned))
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Budget Calculator</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f6f2;
      --bg-2: #cfe3cf;
      --ink: #22302a;
      --income: #2f7d5a;
      --expense: #c04b3a;
      --accent: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8f1e4 60%, #f4f7f0 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: flex-end;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5d675f;
      font-size: 1rem;
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 12px;
    }

    .toggle {
      display: inline-flex;
      background: white;
      border-radius: 999px;
      border: 1px solid rgba(47, 72, 88, 0.12);
      padding: 4px;
    }

    .toggle button {
      border: none;
      background: transparent;
      border-radius: 999px;
      padding: 8px 18px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6a746c;
      cursor: pointer;
    }

    .toggle button.active {
      background: var(--accent);
      color: white;
    }

    select {
      font: inherit;
      padding: 9px 14px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      background: white;
      min-width: 180px;
    }

    .export {
      margin-left: auto;
      text-decoration: none;
      background: var(--accent);
      color: white;
      font-weight: 600;
      border-radius: 999px;
      padding: 11px 22px;
      transition: transform 150ms ease;
    }

    .export:active {
      transform: scale(0.98);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
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
      display: block;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b958d;
    }

    .stat .value {
      display: block;
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--income);
    }

    .stat .value.expense {
      color: var(--expense);
    }

    .stat .value.negative {
      color: var(--expense);
    }

    .stat .planned {
      display: block;
      font-size: 0.85rem;
      color: #8b958d;
    }

    .tabs {
      display: inline-flex;
      gap: 8px;
    }

    .tab {
      border: 1px solid rgba(47, 72, 88, 0.14);
      background: white;
      border-radius: 999px;
      padding: 8px 20px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6a746c;
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .table-card {
      background: white;
      border-radius: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 18px;
      overflow-x: auto;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      padding: 10px 8px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
      text-align: right;
      font-size: 0.95rem;
    }

    th:first-child, td:first-child {
      text-align: left;
    }

    td input {
      font: inherit;
      width: 110px;
      padding: 6px 8px;
      border-radius: 8px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      text-align: right;
    }

    td .diff.positive {
      color: var(--income);
    }

    td .diff.negative {
      color: var(--expense);
    }

    .remove {
      border: none;
      background: transparent;
      color: var(--expense);
      font-weight: 600;
      cursor: pointer;
    }

    .add-row {
      display: flex;
      gap: 10px;
      margin-top: 14px;
    }

    .add-row input {
      flex: 1;
      font: inherit;
      padding: 9px 12px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.18);
    }

    .add-row button {
      border: none;
      border-radius: 10px;
      background: var(--income);
      color: white;
      font-weight: 600;
      padding: 9px 18px;
      cursor: pointer;
    }

    .chart-card {
      background: white;
      border-radius: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 18px;
    }

    .chart-card h2 {
      margin: 0 0 4px;
      font-size: 1.1rem;
    }

    #chart {
      width: 100%;
      height: auto;
    }

    #chart text {
      font-family: "Space Grotesk", sans-serif;
      font-size: 11px;
      fill: #6a746c;
    }

    .legend {
      display: flex;
      gap: 18px;
      font-size: 0.85rem;
      color: #6a746c;
      margin-top: 8px;
    }

    .legend .swatch {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 3px;
      margin-right: 6px;
      vertical-align: -1px;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
    }

    .status[data-type="error"] {
      color: var(--expense);
    }

    .status[data-type="ok"] {
      color: var(--income);
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(14px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 22px;
      }
      .export {
        margin-left: 0;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Budget Calculator</h1>
        <p class="subtitle">Track your income, expenses, and savings with clarity.</p>
      </div>
    </header>

    <section class="controls">
      <div class="toggle" role="tablist">
        <button type="button" data-view="monthly">Monthly</button>
        <button type="button" data-view="weekly">Weekly</button>
      </div>
      <select id="period-select" aria-label="Select period"></select>
      <a class="export" id="export-link" href="/export?view={{VIEW}}">Export CSV</a>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Total Income</span>
        <span id="income-actual" class="value">${{INCOME_ACTUAL}}</span>
        <span class="planned">Planned: $<span id="income-planned">{{INCOME_PLANNED}}</span></span>
      </div>
      <div class="stat">
        <span class="label">Total Expenses</span>
        <span id="expense-actual" class="value expense">${{EXPENSE_ACTUAL}}</span>
        <span class="planned">Planned: $<span id="expense-planned">{{EXPENSE_PLANNED}}</span></span>
      </div>
      <div class="stat">
        <span class="label">Net Savings</span>
        <span id="net-actual" class="value">${{NET_ACTUAL}}</span>
        <span class="planned">Planned: $<span id="net-planned">{{NET_PLANNED}}</span></span>
      </div>
    </section>

    <section>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-tab="income" role="tab">Income</button>
        <button class="tab" type="button" data-tab="expenses" role="tab">Expenses</button>
      </div>
    </section>

    <section class="table-card">
      <table>
        <thead>
          <tr>
            <th>Category</th>
            <th>Planned</th>
            <th>Actual</th>
            <th>Difference</th>
            <th></th>
          </tr>
        </thead>
        <tbody id="category-rows"></tbody>
      </table>
      <form class="add-row" id="add-form">
        <input id="add-name" type="text" placeholder="New category name" />
        <button type="submit">Add category</button>
      </form>
    </section>

    <section class="chart-card">
      <h2 id="chart-title">Planned vs. actual</h2>
      <svg id="chart" viewBox="0 0 640 260" role="img" aria-label="Planned versus actual chart"></svg>
      <div class="legend">
        <span><span class="swatch" style="background:#9db8a8"></span>Planned</span>
        <span><span class="swatch" style="background:#2f4858"></span>Actual</span>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="subtitle">Figures are kept per period. Default categories are fixed; categories you add can be removed again.</p>
  </main>

  <script>
    let view = '{{VIEW}}';
    let period = '{{PERIOD}}';
    let activeTab = 'income';
    let budget = null;

    const periodSelect = document.getElementById('period-select');
    const exportLink = document.getElementById('export-link');
    const rowsEl = document.getElementById('category-rows');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const chartTitleEl = document.getElementById('chart-title');
    const addForm = document.getElementById('add-form');
    const addName = document.getElementById('add-name');
    const viewButtons = Array.from(document.querySelectorAll('.toggle button'));
    const tabButtons = Array.from(document.querySelectorAll('.tab'));

    const money = (value) => '$' + value.toFixed(2);

    function setStatus(message, type) {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => {
          if (statusEl.textContent === message) {
            statusEl.textContent = '';
            statusEl.dataset.type = '';
          }
        }, 2500);
      }
    }

    async function api(path, options) {
      const response = await fetch(path, options);
      if (!response.ok) {
        throw new Error(await response.text() || response.statusText);
      }
      return response.json();
    }

    async function loadPeriods() {
      const options = await api(`/api/periods?view=${view}`);
      periodSelect.innerHTML = '';
      for (const option of options) {
        const el = document.createElement('option');
        el.value = option.value;
        el.textContent = option.label;
        periodSelect.appendChild(el);
      }
      if (!options.some((option) => option.value === period)) {
        const el = document.createElement('option');
        el.value = period;
        el.textContent = period;
        periodSelect.appendChild(el);
      }
      periodSelect.value = period;
    }

    async function loadBudget() {
      render(await api(`/api/budget?view=${view}&period=${encodeURIComponent(period)}`));
    }

    function render(next) {
      budget = next;
      period = next.period;

      document.getElementById('income-actual').textContent = money(next.summary.income_actual);
      document.getElementById('income-planned').textContent = next.summary.income_planned.toFixed(2);
      document.getElementById('expense-actual').textContent = money(next.summary.expense_actual);
      document.getElementById('expense-planned').textContent = next.summary.expense_planned.toFixed(2);
      const netEl = document.getElementById('net-actual');
      netEl.textContent = money(next.summary.net_actual);
      netEl.classList.toggle('negative', next.summary.net_actual < 0);
      document.getElementById('net-planned').textContent = next.summary.net_planned.toFixed(2);

      renderRows();
      drawChart();
    }

    function categoriesForTab() {
      return activeTab === 'income' ? budget.income : budget.expenses;
    }

    function renderRows() {
      rowsEl.innerHTML = '';
      for (const category of categoriesForTab()) {
        const row = document.createElement('tr');

        const name = document.createElement('td');
        name.textContent = category.name;
        row.appendChild(name);

        row.appendChild(numberCell(category, 'planned'));
        row.appendChild(numberCell(category, 'actual'));

        const diff = document.createElement('td');
        const diffValue = category.actual - category.planned;
        const span = document.createElement('span');
        span.className = 'diff ' + (diffValue >= 0 ? 'positive' : 'negative');
        span.textContent = money(diffValue);
        diff.appendChild(span);
        row.appendChild(diff);

        const actions = document.createElement('td');
        if (category.isCustom) {
          const button = document.createElement('button');
          button.type = 'button';
          button.className = 'remove';
          button.textContent = 'Remove';
          button.addEventListener('click', () => removeCategory(category.id));
          actions.appendChild(button);
        }
        row.appendChild(actions);

        rowsEl.appendChild(row);
      }
    }

    function numberCell(category, field) {
      const cell = document.createElement('td');
      const input = document.createElement('input');
      input.type = 'number';
      input.step = '0.01';
      input.value = category[field];
      input.addEventListener('change', () => {
        // Malformed input becomes 0 before it ever reaches the server.
        const parsed = parseFloat(input.value);
        updateField(category.id, field, Number.isFinite(parsed) ? parsed : 0);
      });
      cell.appendChild(input);
      return cell;
    }

    async function updateField(id, field, value) {
      try {
        render(await api('/api/category/update', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ period, id, field, value }),
        }));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    }

    async function addCategory(name) {
      const kind = activeTab === 'income' ? 'income' : 'expense';
      try {
        render(await api('/api/category/add', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ period, kind, name }),
        }));
        setStatus('Category added.', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    }

    async function removeCategory(id) {
      try {
        render(await api('/api/category/remove', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ period, id }),
        }));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    }

    function drawChart() {
      const categories = categoriesForTab().filter(
        (category) => category.planned !== 0 || category.actual !== 0
      );
      chartTitleEl.textContent =
        (activeTab === 'income' ? 'Income' : 'Expenses') + ': planned vs. actual';
      chartEl.innerHTML = '';

      const width = 640;
      const height = 260;
      const pad = { top: 16, right: 12, bottom: 58, left: 12 };

      if (categories.length === 0) {
        const empty = document.createElementNS('http://www.w3.org/2000/svg', 'text');
        empty.setAttribute('x', width / 2);
        empty.setAttribute('y', height / 2);
        empty.setAttribute('text-anchor', 'middle');
        empty.textContent = 'No figures yet for this period.';
        chartEl.appendChild(empty);
        return;
      }

      const max = Math.max(...categories.map((c) => Math.max(c.planned, c.actual)), 1);
      const slot = (width - pad.left - pad.right) / categories.length;
      const barWidth = Math.min(26, slot / 2.6);

      categories.forEach((category, index) => {
        const center = pad.left + slot * index + slot / 2;
        const scale = (value) => (value / max) * (height - pad.top - pad.bottom);

        const planned = document.createElementNS('http://www.w3.org/2000/svg', 'rect');
        planned.setAttribute('x', center - barWidth - 2);
        planned.setAttribute('y', height - pad.bottom - scale(category.planned));
        planned.setAttribute('width', barWidth);
        planned.setAttribute('height', scale(category.planned));
        planned.setAttribute('fill', '#9db8a8');
        planned.setAttribute('rx', 3);
        chartEl.appendChild(planned);

        const actual = document.createElementNS('http://www.w3.org/2000/svg', 'rect');
        actual.setAttribute('x', center + 2);
        actual.setAttribute('y', height - pad.bottom - scale(category.actual));
        actual.setAttribute('width', barWidth);
        actual.setAttribute('height', scale(category.actual));
        actual.setAttribute('fill', '#2f4858');
        actual.setAttribute('rx', 3);
        chartEl.appendChild(actual);

        const label = document.createElementNS('http://www.w3.org/2000/svg', 'text');
        label.setAttribute('x', center);
        label.setAttribute('y', height - pad.bottom + 14);
        label.setAttribute('text-anchor', 'end');
        label.setAttribute('transform', `rotate(-35 ${center} ${height - pad.bottom + 14})`);
        label.textContent = category.name;
        chartEl.appendChild(label);
      });
    }

    async function switchView(nextView) {
      view = nextView;
      exportLink.href = `/export?view=${view}`;
      viewButtons.forEach((button) =>
        button.classList.toggle('active', button.dataset.view === view)
      );
      // Without an explicit period the server resolves today's key.
      const next = await api(`/api/budget?view=${view}`);
      period = next.period;
      await loadPeriods();
      render(next);
    }

    viewButtons.forEach((button) => {
      button.classList.toggle('active', button.dataset.view === view);
      button.addEventListener('click', () => {
        if (button.dataset.view !== view) {
          switchView(button.dataset.view).catch((err) => setStatus(err.message, 'error'));
        }
      });
    });

    tabButtons.forEach((button) => {
      button.addEventListener('click', () => {
        activeTab = button.dataset.tab;
        tabButtons.forEach((tab) => tab.classList.toggle('active', tab === button));
        renderRows();
        drawChart();
      });
    });

    periodSelect.addEventListener('change', () => {
      period = periodSelect.value;
      loadBudget().catch((err) => setStatus(err.message, 'error'));
    });

    addForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const name = addName.value.trim();
      if (!name) {
        setStatus('Enter a category name first.', 'error');
        return;
      }
      addName.value = '';
      addCategory(name);
    });

    loadPeriods()
      .then(loadBudget)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
